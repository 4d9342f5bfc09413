//! Path type addressing a node relative to another node.

use std::fmt;

/// An ordered sequence of keys addressing a descendant relative to some
/// start node.
///
/// The empty path addresses the start node itself. Paths are values: every
/// operation that "changes" a path returns a new one.
///
/// # Examples
///
/// ```rust
/// use structfs_hierarchy::{hpath, HierarchyPath};
///
/// let parent: HierarchyPath<&str> = hpath!["users", "alice"];
/// let child = parent.join("settings");
///
/// assert_eq!(parent.len(), 2);
/// assert_eq!(child.to_string(), "users/alice/settings");
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HierarchyPath<K> {
    items: Vec<K>,
}

impl<K> HierarchyPath<K> {
    /// Create the empty path.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a path from an explicit list of keys.
    pub fn from_items(items: impl IntoIterator<Item = K>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Check if this path is empty (addresses the start node).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of keys.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over the keys in order.
    pub fn items(&self) -> std::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// The keys as a slice.
    pub fn as_slice(&self) -> &[K] {
        &self.items
    }

    /// The last key of the path, if any.
    pub fn last(&self) -> Option<&K> {
        self.items.last()
    }
}

impl<K: Clone> HierarchyPath<K> {
    /// Return a new path with `key` appended. `self` is left untouched.
    #[must_use]
    pub fn join(&self, key: K) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(key);
        Self { items }
    }

    /// The path made of the first `len` keys.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the length of the path.
    #[must_use]
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            items: self.items[..len].to_vec(),
        }
    }

    /// The path without its last key. `None` for the empty path.
    pub fn parent(&self) -> Option<Self> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.prefix(self.items.len() - 1))
        }
    }
}

impl<K> Default for HierarchyPath<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> From<Vec<K>> for HierarchyPath<K> {
    fn from(items: Vec<K>) -> Self {
        Self { items }
    }
}

impl<K> FromIterator<K> for HierarchyPath<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a, K> IntoIterator for &'a HierarchyPath<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K> std::ops::Index<usize> for HierarchyPath<K> {
    type Output = K;

    fn index(&self, i: usize) -> &Self::Output {
        &self.items[i]
    }
}

/// Keys joined with `/`.
impl<K: fmt::Display> fmt::Display for HierarchyPath<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Macro for creating paths from a list of keys.
///
/// # Example
///
/// ```rust
/// use structfs_hierarchy::{hpath, HierarchyPath};
///
/// let p: HierarchyPath<i32> = hpath![1, 2, 3];
/// assert_eq!(p.len(), 3);
///
/// let empty: HierarchyPath<i32> = hpath![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! hpath {
    () => {
        $crate::HierarchyPath::new()
    };
    ($($key:expr),+ $(,)?) => {
        $crate::HierarchyPath::from_items([$($key),+])
    };
}
