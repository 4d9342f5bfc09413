//! Traversal algorithms driven by caller-supplied lookup functions.
//!
//! Every algorithm here takes the lookup as a closure, so it works for node
//! types that declare no navigation capability at all:
//!
//! - descent: `FnMut(&N, &K) -> Option<N>` resolves the child under a key,
//! - ascent: `FnMut(&N) -> Option<N>` resolves the parent, `None` at the root.
//!
//! The capability-based methods of [`AncestorsExt`](crate::AncestorsExt) and
//! [`DescendantsExt`](crate::DescendantsExt) are thin wrappers that build
//! these closures from the node traits.

mod ancestors;
mod descendants;
mod descent;
mod visit;

pub(crate) use ancestors::parent_of;
pub(crate) use descendants::child_of;

pub use ancestors::{ancestors, parent, Ancestors, ParentLookup};
pub use descendants::{
    descend_along_path, descendant_at, descendant_at_or_default, descendant_at_or_else,
    try_get_descendant_at, ChildLookup, DescendAlongPath,
};
pub use visit::visit_descendant_at_and_ancestors;
