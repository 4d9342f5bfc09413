//! Descend to a node, then report it and every node passed on the way down.

use std::fmt::Display;

use crate::error::Error;
use crate::path::HierarchyPath;
use crate::traverse::descent::{Descent, Step};

/// Descend from `start` along `path`, then present the descendant to
/// `visit_descendant` and every node passed on the way down to
/// `visit_ancestor`, nearest first, ending with `start`.
///
/// For an empty path `start` is the descendant: `visit_descendant` is called
/// once with it and `visit_ancestor` is never called.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if a visitor is `None`. Checked before any
///   lookup happens.
/// - [`Error::NotFound`] if a key along `path` does not resolve. No visitor is
///   called in that case.
///
/// ```rust
/// use structfs_hierarchy::{hpath, traverse};
///
/// let lookup = |node: &&'static str, key: &&'static str| match (*node, *key) {
///     ("root", "a") => Some("a"),
///     ("a", "b") => Some("b"),
///     _ => None,
/// };
///
/// let mut descendant = None;
/// let mut ancestors = Vec::new();
/// traverse::visit_descendant_at_and_ancestors(
///     "root",
///     lookup,
///     &hpath!["a", "b"],
///     Some(&mut |d| descendant = Some(d)),
///     Some(&mut |a| ancestors.push(a)),
/// )
/// .unwrap();
///
/// assert_eq!(descendant, Some("b"));
/// assert_eq!(ancestors, vec!["a", "root"]);
/// ```
pub fn visit_descendant_at_and_ancestors<N, K, F>(
    start: N,
    lookup: F,
    path: &HierarchyPath<K>,
    visit_descendant: Option<&mut dyn FnMut(N)>,
    visit_ancestor: Option<&mut dyn FnMut(N)>,
) -> Result<(), Error>
where
    K: Clone + Display,
    F: FnMut(&N, &K) -> Option<N>,
{
    let visit_descendant = visit_descendant.ok_or(Error::InvalidArgument {
        name: "visit_descendant",
    })?;
    let visit_ancestor = visit_ancestor.ok_or(Error::InvalidArgument {
        name: "visit_ancestor",
    })?;

    // Nodes left behind on the way down, start first.
    let mut passed = Vec::with_capacity(path.len());
    let mut walk = Descent::new(start, path, lookup);
    loop {
        match walk.step() {
            Step::Descended { left } => passed.push(left),
            Step::Arrived => break,
            Step::Unresolved => return Err(Error::not_found(&walk.attempted())),
        }
    }

    visit_descendant(walk.into_node());
    while let Some(ancestor) = passed.pop() {
        visit_ancestor(ancestor);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hpath;
    use std::cell::Cell;

    fn hierarchy(node: &&'static str, key: &&'static str) -> Option<&'static str> {
        match (*node, *key) {
            ("startNode", "childNode") => Some("childNode"),
            ("childNode", "grandChild") => Some("grandChild"),
            ("startNode", _) => None,
            _ => panic!("unknown node"),
        }
    }

    fn unknown_node(_: &&'static str, _: &&'static str) -> Option<&'static str> {
        panic!("unknown node")
    }

    #[test]
    fn visits_start_node_as_descendant_once() {
        let mut descendants = Vec::new();
        let mut ancestors: Vec<&str> = Vec::new();

        visit_descendant_at_and_ancestors(
            "startNode",
            unknown_node,
            &hpath![],
            Some(&mut |d| descendants.push(d)),
            Some(&mut |a| ancestors.push(a)),
        )
        .unwrap();

        assert_eq!(descendants, vec!["startNode"]);
        assert!(ancestors.is_empty());
    }

    #[test]
    fn visits_child_then_start() {
        let mut descendant = None;
        let mut ancestors = Vec::new();

        visit_descendant_at_and_ancestors(
            "startNode",
            hierarchy,
            &hpath!["childNode"],
            Some(&mut |d| descendant = Some(d)),
            Some(&mut |a| ancestors.push(a)),
        )
        .unwrap();

        assert_eq!(descendant, Some("childNode"));
        assert_eq!(ancestors, vec!["startNode"]);
    }

    #[test]
    fn visits_grandchild_then_ancestors_nearest_first() {
        let mut descendants = Vec::new();
        let mut ancestors = Vec::new();

        visit_descendant_at_and_ancestors(
            "startNode",
            hierarchy,
            &hpath!["childNode", "grandChild"],
            Some(&mut |d| descendants.push(d)),
            Some(&mut |a| ancestors.push(a)),
        )
        .unwrap();

        assert_eq!(descendants, vec!["grandChild"]);
        assert_eq!(ancestors, vec!["childNode", "startNode"]);
    }

    #[test]
    fn missing_descendant_visitor_fails_before_lookup() {
        let mut ancestors: Vec<&str> = Vec::new();

        let err = visit_descendant_at_and_ancestors(
            "startNode",
            unknown_node,
            &hpath!["childNode"],
            None,
            Some(&mut |a| ancestors.push(a)),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidArgument {
                name: "visit_descendant"
            }
        ));
        assert!(ancestors.is_empty());
    }

    #[test]
    fn missing_ancestor_visitor_fails_before_lookup() {
        let mut descendant = None;

        let err = visit_descendant_at_and_ancestors(
            "startNode",
            unknown_node,
            &hpath!["childNode"],
            Some(&mut |d| descendant = Some(d)),
            None,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidArgument {
                name: "visit_ancestor"
            }
        ));
        assert_eq!(descendant, None);
    }

    #[test]
    fn invalid_path_fails_without_visiting() {
        let mut descendant = None;
        let mut ancestor = None;

        let err = visit_descendant_at_and_ancestors(
            "startNode",
            hierarchy,
            &hpath!["missing"],
            Some(&mut |d| descendant = Some(d)),
            Some(&mut |a| ancestor = Some(a)),
        )
        .unwrap_err();

        assert!(err.to_string().contains("'missing'"));
        assert_eq!(descendant, None);
        assert_eq!(ancestor, None);
    }

    #[test]
    fn invalid_deeper_path_reports_prefix() {
        let visited = Cell::new(0);
        let lookup = |n: &&'static str, k: &&'static str| match (*n, *k) {
            ("grandChild", _) => None,
            _ => hierarchy(n, k),
        };

        let err = visit_descendant_at_and_ancestors(
            "startNode",
            lookup,
            &hpath!["childNode", "grandChild", "missing"],
            Some(&mut |_| visited.set(visited.get() + 1)),
            Some(&mut |_| visited.set(visited.get() + 1)),
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "key not found: 'childNode/grandChild/missing'"
        );
        assert_eq!(visited.get(), 0);
    }
}
