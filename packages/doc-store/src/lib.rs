//! StructFS Doc Store: hierarchy nodes persisted in a document collection
//!
//! Every node is one [`NodeRecord`] in a [`NodeCollection`]. A record keeps
//! its children as an index from child key to the child's record identifier,
//! so a whole tree can be loaded lazily, one node at a time, starting from
//! any record.
//!
//! [`DocumentNode`] wraps a record and implements the capability traits and
//! [`MutableNode`](structfs_hierarchy::MutableNode) of `structfs-hierarchy`,
//! which makes every traversal of that crate available on stored trees.
//!
//! Two collections ship with the crate:
//! - [`InMemoryCollection`] for tests and ephemeral trees
//! - [`JsonDirCollection`] storing one pretty-printed JSON file per record

mod collection;
mod error;
mod in_memory;
mod local_disk;
mod node;
mod record;

pub use collection::NodeCollection;
pub use error::StoreError;
pub use in_memory::InMemoryCollection;
pub use local_disk::JsonDirCollection;
pub use node::DocumentNode;
pub use record::{NodeRecord, RecordId};
