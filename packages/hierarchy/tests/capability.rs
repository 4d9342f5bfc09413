use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use structfs_hierarchy::{
    hpath, traverse, AncestorsExt, DescendantsExt, Error, HasChildNodes,
    HasIdentifiableChildNodes, HasParentNode, HierarchyPath,
};

/// An in-memory tree node counting how often its navigation accessors run.
#[derive(Default)]
struct TreeNode {
    name: String,
    parent: RefCell<Weak<TreeNode>>,
    children: RefCell<BTreeMap<String, Rc<TreeNode>>>,
    has_parent_calls: Cell<usize>,
    parent_calls: Cell<usize>,
}

#[derive(Clone, Debug)]
struct Node(Rc<TreeNode>);

impl std::fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeNode({})", self.name)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Node {
    fn root(name: &str) -> Self {
        Node(Rc::new(TreeNode {
            name: name.to_string(),
            ..Default::default()
        }))
    }

    fn add(&self, name: &str) -> Self {
        let child = Node::root(name);
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0
            .children
            .borrow_mut()
            .insert(name.to_string(), child.0.clone());
        child
    }

    fn name(&self) -> &str {
        &self.0.name
    }
}

impl HasParentNode for Node {
    fn has_parent_node(&self) -> bool {
        self.0.has_parent_calls.set(self.0.has_parent_calls.get() + 1);
        self.0.parent.borrow().upgrade().is_some()
    }

    fn parent_node(&self) -> Self {
        self.0.parent_calls.set(self.0.parent_calls.get() + 1);
        Node(self.0.parent.borrow().upgrade().expect("parent_node called on a root"))
    }
}

impl HasChildNodes for Node {
    fn has_child_nodes(&self) -> bool {
        !self.0.children.borrow().is_empty()
    }
}

impl HasIdentifiableChildNodes<String> for Node {
    fn try_get_child_node(&self, key: &String) -> Option<Self> {
        self.0.children.borrow().get(key).cloned().map(Node)
    }
}

fn path(items: &[&str]) -> HierarchyPath<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// root -> a -> b -> c, root -> x
fn sample() -> (Node, Node, Node, Node) {
    let root = Node::root("root");
    let a = root.add("a");
    let b = a.add("b");
    let c = b.add("c");
    root.add("x");
    (root, a, b, c)
}

#[test]
fn root_node_returns_empty_ancestors() {
    let root = Node::root("root");

    let result: Vec<Node> = root.ancestors().collect();

    assert!(result.is_empty());
    assert_eq!(root.0.has_parent_calls.get(), 1);
    assert_eq!(root.0.parent_calls.get(), 0);
}

#[test]
fn inner_node_returns_path_to_root() {
    let (root, a, b, c) = sample();

    let result: Vec<Node> = c.ancestors().collect();

    assert_eq!(result, vec![b.clone(), a.clone(), root.clone()]);
    for node in [&c, &b, &a] {
        assert_eq!(node.0.has_parent_calls.get(), 1);
        assert_eq!(node.0.parent_calls.get(), 1);
    }
    assert_eq!(root.0.has_parent_calls.get(), 1);
    assert_eq!(root.0.parent_calls.get(), 0);
}

#[test]
fn ancestors_length_is_hop_count() {
    let (root, a, b, c) = sample();

    assert_eq!(root.ancestors().count(), 0);
    assert_eq!(a.ancestors().count(), 1);
    assert_eq!(b.ancestors().count(), 2);
    assert_eq!(c.ancestors().count(), 3);
}

#[test]
fn ancestors_stop_early_without_further_lookups() {
    let (root, _, b, c) = sample();

    let nearest = c.ancestors().next();

    assert_eq!(nearest, Some(b.clone()));
    assert_eq!(b.0.has_parent_calls.get(), 0);
    assert_eq!(root.0.has_parent_calls.get(), 0);
}

#[test]
fn descendant_at_resolves_nested_child() {
    let (root, _, _, c) = sample();

    let found = root.clone().descendant_at(&path(&["a", "b", "c"])).unwrap();
    assert_eq!(found, c);

    let own = root.clone().descendant_at(&path(&[])).unwrap();
    assert_eq!(own, root);
}

#[test]
fn descendant_at_names_failing_prefix() {
    let (root, _, _, _) = sample();

    let err = root.descendant_at(&path(&["a", "nope", "c"])).unwrap_err();

    assert!(matches!(err, Error::NotFound { ref path } if path == "a/nope"));
    assert_eq!(err.to_string(), "key not found: 'a/nope'");
}

#[test]
fn try_get_descendant_at_is_lenient() {
    let (root, a, _, _) = sample();

    assert_eq!(root.clone().try_get_descendant_at(&path(&["a"])), Some(a));
    assert_eq!(root.try_get_descendant_at(&path(&["a", "zzz"])), None);
}

#[test]
fn descendant_at_or_default_reports_found_prefix() {
    let (root, _, b, _) = sample();

    let fallback = Node::root("fallback");
    let (node, found) = root
        .clone()
        .descendant_at_or_else(&path(&["a", "b", "missing", "c"]), || fallback.clone());
    assert_eq!(node, fallback);
    assert_eq!(found, path(&["a", "b"]));

    let (node, found) = root.descendant_at_or_else(&path(&["a", "b"]), || fallback.clone());
    assert_eq!(node, b);
    assert_eq!(found, path(&["a", "b"]));
}

#[test]
fn descend_along_path_yields_start_then_resolved_nodes() {
    let (root, a, b, _) = sample();

    let names = |p: &HierarchyPath<String>| -> Vec<String> {
        root.clone()
            .descend_along_path(p)
            .map(|n| n.name().to_string())
            .collect()
    };

    assert_eq!(names(&path(&[])), vec!["root"]);
    assert_eq!(names(&path(&["a", "b"])), vec!["root", "a", "b"]);
    assert_eq!(names(&path(&["a", "nope", "b"])), vec!["root", "a"]);
    assert_eq!(names(&path(&["nope"])), vec!["root"]);

    let nodes: Vec<Node> = root.clone().descend_along_path(&path(&["a", "b"])).collect();
    assert_eq!(nodes, vec![root, a, b]);
}

#[test]
fn visitor_reports_descendant_then_ancestors() {
    let (root, a, b, c) = sample();

    let mut descendants = Vec::new();
    let mut ancestors = Vec::new();
    root.clone()
        .visit_descendant_at_and_ancestors(
            &path(&["a", "b", "c"]),
            Some(&mut |d| descendants.push(d)),
            Some(&mut |a| ancestors.push(a)),
        )
        .unwrap();

    assert_eq!(descendants, vec![c]);
    assert_eq!(ancestors, vec![b, a, root]);
}

#[test]
fn visitor_with_empty_path_visits_start_once() {
    let root = Node::root("root");

    let mut descendants = Vec::new();
    let mut ancestor_calls = 0;
    root.clone()
        .visit_descendant_at_and_ancestors(
            &path(&[]),
            Some(&mut |d| descendants.push(d)),
            Some(&mut |_| ancestor_calls += 1),
        )
        .unwrap();

    assert_eq!(descendants, vec![root]);
    assert_eq!(ancestor_calls, 0);
}

#[test]
fn has_child_nodes_reflects_children() {
    let (root, _, _, c) = sample();
    assert!(root.has_child_nodes());
    assert!(!c.has_child_nodes());
}

#[test]
fn both_strategies_agree() {
    let (root, _, _, _) = sample();
    let lookup = |n: &Node, k: &String| n.try_get_child_node(k);

    let paths = [
        path(&[]),
        path(&["a"]),
        path(&["a", "b", "c"]),
        path(&["x"]),
        path(&["x", "y"]),
        path(&["a", "q", "c"]),
    ];

    for p in &paths {
        let by_trait: Vec<Node> = root.clone().descend_along_path(p).collect();
        let by_lookup: Vec<Node> = traverse::descend_along_path(root.clone(), lookup, p).collect();
        assert_eq!(by_trait, by_lookup);

        assert_eq!(
            root.clone().try_get_descendant_at(p),
            traverse::try_get_descendant_at(root.clone(), lookup, p)
        );

        let strict_trait = root.clone().descendant_at(p).map_err(|e| e.to_string());
        let strict_lookup =
            traverse::descendant_at(root.clone(), lookup, p).map_err(|e| e.to_string());
        assert_eq!(strict_trait, strict_lookup);
    }
}

#[test]
fn lookup_strategy_needs_no_capability() {
    // Plain integers: the child under key k of node n is n * 10 + k, below 10000.
    let lookup = |n: &u32, k: &u32| if *n < 1000 { Some(n * 10 + k) } else { None };

    let nodes: Vec<u32> = traverse::descend_along_path(1, lookup, &hpath![2, 3, 4, 5]).collect();
    assert_eq!(nodes, vec![1, 12, 123, 1234]);

    let parent_of = |n: &u32| if *n >= 10 { Some(n / 10) } else { None };
    let ancestors: Vec<u32> = traverse::ancestors(&1234, parent_of).collect();
    assert_eq!(ancestors, vec![123, 12, 1]);
}
