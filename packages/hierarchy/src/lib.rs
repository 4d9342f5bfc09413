//! StructFS Hierarchy: traversal and structural edits over tree-shaped data
//!
//! This crate knows nothing about how a tree is stored. It offers:
//! - `HierarchyPath`: an immutable key sequence addressing a node relative
//!   to another node
//! - Node capability traits (`HasParentNode`, `HasChildNodes`,
//!   `HasIdentifiableChildNodes`) a node type can implement
//! - `traverse`: ancestor walks, path-addressed descent, lazy path following
//!   and a descend-then-report visitor, all driven by lookup closures
//! - `AncestorsExt` / `DescendantsExt`: the same algorithms as methods on
//!   node types implementing the capability traits
//! - `MutableNode`: the contract for adding, removing and replacing children
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use structfs_hierarchy::{hpath, traverse};
//!
//! let mut children = BTreeMap::new();
//! children.insert(("root", "docs"), "docs");
//! children.insert(("docs", "guide"), "guide");
//!
//! let lookup =
//!     |node: &&'static str, key: &&'static str| children.get(&(*node, *key)).copied();
//!
//! let guide = traverse::descendant_at("root", lookup, &hpath!["docs", "guide"]).unwrap();
//! assert_eq!(guide, "guide");
//!
//! let err = traverse::descendant_at("root", lookup, &hpath!["docs", "api"]).unwrap_err();
//! assert_eq!(err.to_string(), "key not found: 'docs/api'");
//! ```

mod error;
mod ext;
mod mutable;
pub mod node;
mod path;
pub mod traverse;

pub use error::Error;
pub use ext::{AncestorsExt, DescendantsExt};
pub use mutable::MutableNode;
pub use node::{HasChildNodes, HasIdentifiableChildNodes, HasParentNode};
pub use path::HierarchyPath;
