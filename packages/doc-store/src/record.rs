//! The stored form of a node.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored record.
///
/// Opaque and stable: it is assigned once and never changes. Serialized as
/// the hyphenated UUID string.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        RecordId(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(RecordId)
    }
}

/// One node as stored in a [`NodeCollection`](crate::NodeCollection).
///
/// The child index maps each child's key to the identifier of the child's
/// own record. It is embedded in the parent record, so changing the set of
/// children always rewrites the whole parent record.
///
/// ```json
/// { "_id": "…", "key": "a", "value": 1, "cn": { "b": "…" } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    #[serde(rename = "cn", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub child_nodes: BTreeMap<String, RecordId>,
}

impl NodeRecord {
    /// An empty record without identifier, key, value or children.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty record carrying `key`.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// An empty record with a fixed identifier.
    pub fn with_id(id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}
