//! Descending from a node along a path.

use std::fmt::Display;
use std::iter::FusedIterator;

use crate::error::Error;
use crate::node::HasIdentifiableChildNodes;
use crate::path::HierarchyPath;
use crate::traverse::descent::{Descent, Step};

/// Lookup resolving the child of a node stored under a key.
pub type ChildLookup<N, K> = fn(&N, &K) -> Option<N>;

/// Retrieve the descendant of `start` addressed by `path`.
///
/// Children are resolved with `lookup`. An empty path returns `start`.
///
/// # Errors
///
/// [`Error::NotFound`] naming the keys consumed up to and including the first
/// one that did not resolve.
pub fn descendant_at<N, K, F>(start: N, lookup: F, path: &HierarchyPath<K>) -> Result<N, Error>
where
    K: Clone + Display,
    F: FnMut(&N, &K) -> Option<N>,
{
    let mut walk = Descent::new(start, path, lookup);
    loop {
        match walk.step() {
            Step::Descended { .. } => continue,
            Step::Arrived => return Ok(walk.into_node()),
            Step::Unresolved => return Err(Error::not_found(&walk.attempted())),
        }
    }
}

/// Retrieve the descendant of `start` addressed by `path`, or `None` if any
/// key along the path does not resolve.
pub fn try_get_descendant_at<N, K, F>(start: N, lookup: F, path: &HierarchyPath<K>) -> Option<N>
where
    F: FnMut(&N, &K) -> Option<N>,
{
    let mut walk = Descent::new(start, path, lookup);
    loop {
        match walk.step() {
            Step::Descended { .. } => continue,
            Step::Arrived => return Some(walk.into_node()),
            Step::Unresolved => return None,
        }
    }
}

/// Retrieve the descendant of `start` addressed by `path`, falling back to
/// `default` on the first key that does not resolve.
///
/// Also returns the longest prefix of `path` that was resolved: the whole
/// path on success, the keys before the failing one otherwise.
pub fn descendant_at_or_else<N, K, F, D>(
    start: N,
    lookup: F,
    path: &HierarchyPath<K>,
    default: D,
) -> (N, HierarchyPath<K>)
where
    K: Clone,
    F: FnMut(&N, &K) -> Option<N>,
    D: FnOnce() -> N,
{
    let mut walk = Descent::new(start, path, lookup);
    loop {
        match walk.step() {
            Step::Descended { .. } => continue,
            Step::Arrived => {
                let found = walk.resolved();
                return (walk.into_node(), found);
            }
            Step::Unresolved => return (default(), walk.resolved()),
        }
    }
}

/// Like [`descendant_at_or_else`] with `N::default()` as the fallback.
pub fn descendant_at_or_default<N, K, F>(
    start: N,
    lookup: F,
    path: &HierarchyPath<K>,
) -> (N, HierarchyPath<K>)
where
    N: Default,
    K: Clone,
    F: FnMut(&N, &K) -> Option<N>,
{
    descendant_at_or_else(start, lookup, path, N::default)
}

/// Lazily follow `path` from `start`.
///
/// The returned iterator yields `start` first (so it is never empty), then
/// every descendant resolved along `path`. It ends silently at the first key
/// that does not resolve.
///
/// ```rust
/// use structfs_hierarchy::{hpath, traverse};
///
/// let lookup = |node: &String, key: &&str| match (node.as_str(), *key) {
///     ("root", "a") => Some("a".to_string()),
///     _ => None,
/// };
///
/// let nodes: Vec<String> =
///     traverse::descend_along_path("root".to_string(), lookup, &hpath!["a", "b"]).collect();
/// assert_eq!(nodes, vec!["root", "a"]);
/// ```
pub fn descend_along_path<N, K, F>(
    start: N,
    lookup: F,
    path: &HierarchyPath<K>,
) -> DescendAlongPath<'_, N, K, F>
where
    N: Clone,
    F: FnMut(&N, &K) -> Option<N>,
{
    DescendAlongPath {
        walk: Descent::new(start, path, lookup),
        started: false,
        done: false,
    }
}

/// Lazy iterator over the nodes passed while following a path.
///
/// Created by [`descend_along_path`] or
/// [`DescendantsExt::descend_along_path`](crate::DescendantsExt::descend_along_path).
pub struct DescendAlongPath<'p, N, K, F> {
    walk: Descent<'p, N, K, F>,
    started: bool,
    done: bool,
}

impl<N, K, F> Iterator for DescendAlongPath<'_, N, K, F>
where
    N: Clone,
    F: FnMut(&N, &K) -> Option<N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.walk.node().clone());
        }

        match self.walk.step() {
            Step::Descended { .. } => Some(self.walk.node().clone()),
            Step::Arrived | Step::Unresolved => {
                self.done = true;
                None
            }
        }
    }
}

impl<N, K, F> FusedIterator for DescendAlongPath<'_, N, K, F>
where
    N: Clone,
    F: FnMut(&N, &K) -> Option<N>,
{
}

/// Child lookup synthesized from the [`HasIdentifiableChildNodes`] capability.
pub(crate) fn child_of<N, K>(node: &N, key: &K) -> Option<N>
where
    N: HasIdentifiableChildNodes<K>,
{
    node.try_get_child_node(key)
}
