//! Walking from a node towards the root.

use std::iter::FusedIterator;

use crate::node::HasParentNode;

/// Lookup resolving the parent of a node, `None` at the root.
pub type ParentLookup<N> = fn(&N) -> Option<N>;

/// Lazy iterator over the ancestors of a node, nearest first.
///
/// Created by [`ancestors`] or [`AncestorsExt::ancestors`](crate::AncestorsExt::ancestors).
/// Each call to `next` resolves exactly one parent.
pub struct Ancestors<'a, N, F> {
    start: Option<&'a N>,
    current: Option<N>,
    parent_of: F,
}

impl<'a, N, F> Ancestors<'a, N, F>
where
    F: FnMut(&N) -> Option<N>,
{
    pub(crate) fn new(start: &'a N, parent_of: F) -> Self {
        Self {
            start: Some(start),
            current: None,
            parent_of,
        }
    }
}

impl<N, F> Iterator for Ancestors<'_, N, F>
where
    N: Clone,
    F: FnMut(&N) -> Option<N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let parent = match (self.start.take(), &self.current) {
            (Some(start), _) => (self.parent_of)(start),
            (None, Some(current)) => (self.parent_of)(current),
            (None, None) => return None,
        };
        self.current = parent.clone();
        parent
    }
}

impl<N, F> FusedIterator for Ancestors<'_, N, F>
where
    N: Clone,
    F: FnMut(&N) -> Option<N>,
{
}

/// Iterate the ancestors of `start`, nearest first, using `parent_of` to
/// resolve each parent.
///
/// `parent_of` must return `None` at the root. A root yields nothing.
///
/// ```rust
/// use structfs_hierarchy::traverse;
///
/// let parent_of = |node: &&'static str| match *node {
///     "leaf" => Some("branch"),
///     "branch" => Some("root"),
///     _ => None,
/// };
///
/// let ancestors: Vec<&str> = traverse::ancestors(&"leaf", parent_of).collect();
/// assert_eq!(ancestors, vec!["branch", "root"]);
/// ```
pub fn ancestors<N, F>(start: &N, parent_of: F) -> Ancestors<'_, N, F>
where
    F: FnMut(&N) -> Option<N>,
{
    Ancestors::new(start, parent_of)
}

/// The parent of `start`, or `None` if `start` is a root.
pub fn parent<N, F>(start: &N, mut parent_of: F) -> Option<N>
where
    F: FnMut(&N) -> Option<N>,
{
    parent_of(start)
}

/// Parent lookup synthesized from the [`HasParentNode`] capability.
///
/// `parent_node` is only read after `has_parent_node` returned `true`.
pub(crate) fn parent_of<N: HasParentNode>(node: &N) -> Option<N> {
    if node.has_parent_node() {
        Some(node.parent_node())
    } else {
        None
    }
}
