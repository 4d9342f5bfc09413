//! Structural edits on a node's set of children.

use crate::error::Error;
use crate::node::{HasChildNodes, HasIdentifiableChildNodes};

/// A node whose children can be added, removed and replaced.
///
/// Children are addressed by key; a key is unique among siblings. Every
/// operation validates its preconditions before touching any state, so a
/// failed edit leaves the node and its storage as they were.
///
/// Node equality for implementors is identity of the backing storage, not
/// of the wrapper: two wrappers of the same stored node compare equal.
///
/// All methods return `&mut Self` so edits chain:
///
/// ```rust,ignore
/// root.add_child(&a)?.add_child(&b)?;
/// ```
pub trait MutableNode<K>: HasIdentifiableChildNodes<K> + HasChildNodes {
    /// Add `new_child` under its own key.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if `new_child` has no key, or if a child is
    /// already stored under that key.
    fn add_child(&mut self, new_child: &Self) -> Result<&mut Self, Error>;

    /// Remove `child` if it is the child currently stored under its key.
    ///
    /// Removing a child that is not linked (absent key, or another child
    /// linked under that key) does nothing.
    fn remove_child(&mut self, child: &Self) -> Result<&mut Self, Error>;

    /// Replace `old_child` with `new_child` under their shared key.
    ///
    /// Does nothing if `old_child` and `new_child` are the same instance.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if the keys differ, or if `old_child` is not
    /// the child currently stored under that key.
    fn replace_child(&mut self, old_child: &Self, new_child: &Self) -> Result<&mut Self, Error>;
}
