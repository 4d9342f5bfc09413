//! The single walk every path-following algorithm is built on.

use crate::path::HierarchyPath;

/// Outcome of one [`Descent::step`].
pub(crate) enum Step<N> {
    /// The next key resolved. Carries the node that was left behind.
    Descended { left: N },
    /// Every key of the path has been consumed.
    Arrived,
    /// The next key did not resolve. The walk stays where it is.
    Unresolved,
}

/// Pull-based walk from a start node along a path.
///
/// Each call to [`step`](Self::step) performs at most one child lookup.
/// Callers decide whether [`Step::Unresolved`] ends the walk silently or
/// becomes an error.
pub(crate) struct Descent<'p, N, K, F> {
    node: N,
    path: &'p HierarchyPath<K>,
    consumed: usize,
    lookup: F,
}

impl<'p, N, K, F> Descent<'p, N, K, F>
where
    F: FnMut(&N, &K) -> Option<N>,
{
    pub(crate) fn new(start: N, path: &'p HierarchyPath<K>, lookup: F) -> Self {
        Self {
            node: start,
            path,
            consumed: 0,
            lookup,
        }
    }

    pub(crate) fn step(&mut self) -> Step<N> {
        let Some(key) = self.path.as_slice().get(self.consumed) else {
            return Step::Arrived;
        };

        match (self.lookup)(&self.node, key) {
            Some(child) => {
                self.consumed += 1;
                Step::Descended {
                    left: std::mem::replace(&mut self.node, child),
                }
            }
            None => Step::Unresolved,
        }
    }

    /// The node the walk currently stands on.
    pub(crate) fn node(&self) -> &N {
        &self.node
    }

    pub(crate) fn into_node(self) -> N {
        self.node
    }
}

impl<N, K: Clone, F> Descent<'_, N, K, F> {
    /// Keys resolved so far.
    pub(crate) fn resolved(&self) -> HierarchyPath<K> {
        self.path.prefix(self.consumed)
    }

    /// Keys resolved so far plus the key that failed to resolve.
    pub(crate) fn attempted(&self) -> HierarchyPath<K> {
        self.path.prefix((self.consumed + 1).min(self.path.len()))
    }
}
