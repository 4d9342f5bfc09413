//! Navigation capabilities a node type can declare about itself.
//!
//! A node type implementing these traits can be traversed with the
//! extension methods of [`AncestorsExt`](crate::AncestorsExt) and
//! [`DescendantsExt`](crate::DescendantsExt). Node types that declare
//! nothing can still be traversed by handing a lookup closure to the
//! functions in [`traverse`](crate::traverse).
//!
//! Implementors are usually cheap handles (references, `Rc`s, ids wrapped
//! with a store handle): lookups return owned `Self` values.

/// A node that may know its parent.
pub trait HasParentNode: Sized {
    /// Whether this node has a parent. `false` for a root.
    fn has_parent_node(&self) -> bool;

    /// The parent of this node.
    ///
    /// Only called after [`has_parent_node`](Self::has_parent_node) returned
    /// `true`. Implementations may panic otherwise.
    fn parent_node(&self) -> Self;
}

/// A node that can tell whether it has any children.
pub trait HasChildNodes {
    fn has_child_nodes(&self) -> bool;
}

/// A node whose children are addressable by a key unique among siblings.
pub trait HasIdentifiableChildNodes<K>: Sized {
    /// Look up the child stored under `key`.
    ///
    /// Returns `None` if there is no such child.
    fn try_get_child_node(&self, key: &K) -> Option<Self>;
}
