//! Traversal methods for node types that declare their navigation capabilities.
//!
//! These traits are implemented automatically for every node type
//! implementing the matching trait from [`node`](crate::node). Each method
//! builds the lookup closure from the node trait and delegates to the
//! corresponding function in [`traverse`], so both ways of traversing share
//! one implementation.

use std::fmt::Display;

use crate::error::Error;
use crate::node::{HasIdentifiableChildNodes, HasParentNode};
use crate::path::HierarchyPath;
use crate::traverse::{
    self, child_of, parent_of, Ancestors, ChildLookup, DescendAlongPath, ParentLookup,
};

/// Ancestor walks for nodes implementing [`HasParentNode`].
///
/// # Example
///
/// ```rust
/// use structfs_hierarchy::{AncestorsExt, HasParentNode};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Depth(u32);
///
/// impl HasParentNode for Depth {
///     fn has_parent_node(&self) -> bool {
///         self.0 > 0
///     }
///     fn parent_node(&self) -> Self {
///         Depth(self.0 - 1)
///     }
/// }
///
/// let ancestors: Vec<Depth> = Depth(2).ancestors().collect();
/// assert_eq!(ancestors, vec![Depth(1), Depth(0)]);
/// ```
pub trait AncestorsExt: HasParentNode + Clone {
    /// Lazily iterate the ancestors of this node, nearest first.
    ///
    /// Each step asks `has_parent_node` once and only reads `parent_node`
    /// when it answered `true`.
    fn ancestors(&self) -> Ancestors<'_, Self, ParentLookup<Self>> {
        traverse::ancestors(self, parent_of::<Self> as ParentLookup<Self>)
    }
}

impl<N: HasParentNode + Clone> AncestorsExt for N {}

/// Path-addressed descent for nodes implementing [`HasIdentifiableChildNodes`].
pub trait DescendantsExt<K>: HasIdentifiableChildNodes<K> {
    /// See [`traverse::descendant_at`].
    fn descendant_at(self, path: &HierarchyPath<K>) -> Result<Self, Error>
    where
        K: Clone + Display,
    {
        traverse::descendant_at(self, child_of::<Self, K>, path)
    }

    /// See [`traverse::try_get_descendant_at`].
    fn try_get_descendant_at(self, path: &HierarchyPath<K>) -> Option<Self> {
        traverse::try_get_descendant_at(self, child_of::<Self, K>, path)
    }

    /// See [`traverse::descendant_at_or_else`].
    fn descendant_at_or_else<D>(
        self,
        path: &HierarchyPath<K>,
        default: D,
    ) -> (Self, HierarchyPath<K>)
    where
        K: Clone,
        D: FnOnce() -> Self,
    {
        traverse::descendant_at_or_else(self, child_of::<Self, K>, path, default)
    }

    /// See [`traverse::descendant_at_or_default`].
    fn descendant_at_or_default(self, path: &HierarchyPath<K>) -> (Self, HierarchyPath<K>)
    where
        Self: Default,
        K: Clone,
    {
        traverse::descendant_at_or_default(self, child_of::<Self, K>, path)
    }

    /// See [`traverse::descend_along_path`].
    fn descend_along_path(
        self,
        path: &HierarchyPath<K>,
    ) -> DescendAlongPath<'_, Self, K, ChildLookup<Self, K>>
    where
        Self: Clone,
    {
        traverse::descend_along_path(self, child_of::<Self, K> as ChildLookup<Self, K>, path)
    }

    /// See [`traverse::visit_descendant_at_and_ancestors`].
    fn visit_descendant_at_and_ancestors(
        self,
        path: &HierarchyPath<K>,
        visit_descendant: Option<&mut dyn FnMut(Self)>,
        visit_ancestor: Option<&mut dyn FnMut(Self)>,
    ) -> Result<(), Error>
    where
        K: Clone + Display,
    {
        traverse::visit_descendant_at_and_ancestors(
            self,
            child_of::<Self, K>,
            path,
            visit_descendant,
            visit_ancestor,
        )
    }
}

impl<N: HasIdentifiableChildNodes<K>, K> DescendantsExt<K> for N {}
