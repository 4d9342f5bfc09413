//! A hierarchy node persisted in a [`NodeCollection`].

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::DeserializeOwned;
use serde::Serialize;

use structfs_hierarchy::{Error, HasChildNodes, HasIdentifiableChildNodes, MutableNode};

use crate::collection::NodeCollection;
use crate::error::StoreError;
use crate::record::{NodeRecord, RecordId};

/// A node wrapping one [`NodeRecord`] of a [`NodeCollection`].
///
/// The wrapper owns an in-memory copy of its record. Every structural edit
/// first reloads the child index from the collection, since other wrappers
/// of the same record may have changed it, then persists the affected
/// records and only then commits the change to the in-memory copy.
///
/// Two nodes are equal iff their record identifiers are equal; key, value
/// and children do not take part in equality.
///
/// # Example
///
/// ```rust
/// use structfs_doc_store::{DocumentNode, InMemoryCollection, NodeCollection, NodeRecord};
/// use structfs_hierarchy::{DescendantsExt, HierarchyPath, MutableNode};
///
/// let collection = InMemoryCollection::new();
///
/// let mut root = DocumentNode::new(collection.clone(), NodeRecord::new());
/// collection.insert(root.record()).unwrap();
///
/// let child = DocumentNode::with_key(collection.clone(), NodeRecord::new(), "docs");
/// root.add_child(&child).unwrap();
///
/// let path: HierarchyPath<String> = vec!["docs".to_string()].into();
/// assert_eq!(root.descendant_at(&path).unwrap(), child);
/// ```
#[derive(Clone)]
pub struct DocumentNode<C> {
    collection: C,
    id: RecordId,
    record: NodeRecord,
}

impl<C: NodeCollection + Clone> DocumentNode<C> {
    /// Wrap `record`, assigning it a fresh identifier if it has none.
    ///
    /// Nothing is written to the collection.
    pub fn new(collection: C, mut record: NodeRecord) -> Self {
        let id = *record.id.get_or_insert_with(RecordId::new);
        Self {
            collection,
            id,
            record,
        }
    }

    /// Wrap `record` after setting its key.
    pub fn with_key(collection: C, mut record: NodeRecord, key: impl Into<String>) -> Self {
        record.key = Some(key.into());
        Self::new(collection, record)
    }

    /// Wrap `record` after setting its key and value.
    pub fn with_key_value(
        collection: C,
        mut record: NodeRecord,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        record.value = Some(value);
        Self::with_key(collection, record, key)
    }

    /// Load the record stored under `id`.
    pub fn load(collection: C, id: &RecordId) -> Result<Option<Self>, Error> {
        Ok(collection
            .find_by_id(id)?
            .map(|record| Self::new(collection.clone(), record)))
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn key(&self) -> Option<&str> {
        self.record.key.as_deref()
    }

    /// The in-memory copy of this node's record.
    pub fn record(&self) -> &NodeRecord {
        &self.record
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    pub fn has_value(&self) -> bool {
        self.record.value.is_some()
    }

    pub fn value(&self) -> Option<&serde_json::Value> {
        self.record.value.as_ref()
    }

    /// Deserialize the node's value. `Ok(None)` if the node has no value.
    pub fn try_get_value<T: DeserializeOwned>(&self) -> Result<Option<T>, Error> {
        match &self.record.value {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| Error::Storage(Box::new(e))),
            None => Ok(None),
        }
    }

    /// Set the node's value in memory. Persisted with the next write of
    /// this node's record.
    pub fn set_value<T: Serialize>(&mut self, value: &T) -> Result<(), Error> {
        let value = serde_json::to_value(value).map_err(|e| Error::Storage(Box::new(e)))?;
        self.record.value = Some(value);
        Ok(())
    }

    /// Keys of the child index, in key order.
    pub fn child_keys(&self) -> impl Iterator<Item = &str> {
        self.record.child_nodes.keys().map(String::as_str)
    }

    /// Load the child indexed under `key`.
    ///
    /// `Ok(None)` if the index has no such key. An index entry pointing at
    /// a missing record is [`Error::NotFound`] naming the key.
    pub fn try_load_child(&self, key: &str) -> Result<Option<Self>, Error> {
        let Some(child_id) = self.record.child_nodes.get(key) else {
            return Ok(None);
        };

        let record = self
            .collection
            .find_by_id(child_id)?
            .ok_or_else(|| Error::NotFound {
                path: key.to_string(),
            })?;

        Ok(Some(Self::with_key(self.collection.clone(), record, key)))
    }

    /// Replace the cached child index with the stored one.
    fn reload_child_index(&mut self) -> Result<(), Error> {
        let stored = self
            .collection
            .find_by_id(&self.id)?
            .ok_or(StoreError::RecordNotFound { id: self.id })?;
        self.record.child_nodes = stored.child_nodes;
        Ok(())
    }

    fn is_linked(&self, key: Option<&str>, id: &RecordId) -> bool {
        key.and_then(|key| self.record.child_nodes.get(key)) == Some(id)
    }

    /// Persist `updated` as this node's record, then adopt it.
    ///
    /// If the write fails, `inserted` is deleted again so no unreferenced
    /// child record is left behind.
    fn commit(&mut self, updated: NodeRecord, inserted: &RecordId) -> Result<(), Error> {
        if let Err(err) = self.collection.update(&updated) {
            if let Err(cleanup) = self.collection.delete(inserted) {
                log::warn!("Could not delete record {inserted} after failed update: {cleanup}");
            }
            return Err(err.into());
        }

        self.record = updated;
        Ok(())
    }
}

impl<C> fmt::Debug for DocumentNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentNode")
            .field("id", &self.id)
            .field("key", &self.record.key)
            .field("child_nodes", &self.record.child_nodes)
            .finish()
    }
}

impl<C> PartialEq for DocumentNode<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for DocumentNode<C> {}

impl<C> Hash for DocumentNode<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<C: NodeCollection + Clone> HasChildNodes for DocumentNode<C> {
    fn has_child_nodes(&self) -> bool {
        !self.record.child_nodes.is_empty()
    }
}

impl<C: NodeCollection + Clone> HasIdentifiableChildNodes<String> for DocumentNode<C> {
    fn try_get_child_node(&self, key: &String) -> Option<Self> {
        match self.try_load_child(key) {
            Ok(child) => child,
            Err(err) => {
                log::warn!("Could not load child '{key}' of node {}: {err}", self.id);
                None
            }
        }
    }
}

impl<C: NodeCollection + Clone> MutableNode<String> for DocumentNode<C> {
    fn add_child(&mut self, new_child: &Self) -> Result<&mut Self, Error> {
        let Some(key) = new_child.key() else {
            return Err(Error::invalid_operation("child node must have a key"));
        };

        self.reload_child_index()?;
        if let Some(existing) = self.record.child_nodes.get(key) {
            return Err(Error::invalid_operation(format!(
                "node contains child node (id='{existing}') with same key='{key}'"
            )));
        }

        let child_id = self.collection.insert(&new_child.record)?;

        let mut updated = self.record.clone();
        updated.child_nodes.insert(key.to_string(), child_id);
        self.commit(updated, &child_id)?;

        log::trace!("Added child '{key}' ({child_id}) to node {}", self.id);
        Ok(self)
    }

    /// The child record is deleted before the parent record is rewritten.
    /// If that rewrite fails, the stored index keeps an entry pointing at
    /// the deleted record; lookups then report it as not found.
    fn remove_child(&mut self, child: &Self) -> Result<&mut Self, Error> {
        let Some(key) = child.key() else {
            return Ok(self);
        };
        self.reload_child_index()?;
        if !self.is_linked(Some(key), &child.id) {
            return Ok(self);
        }

        if !self.collection.delete(&child.id)? {
            log::debug!("Child record {} was already gone", child.id);
        }

        let mut updated = self.record.clone();
        updated.child_nodes.remove(key);
        self.collection.update(&updated)?;
        self.record = updated;

        log::trace!("Removed child '{key}' ({}) from node {}", child.id, self.id);
        Ok(self)
    }

    fn replace_child(&mut self, child: &Self, new_child: &Self) -> Result<&mut Self, Error> {
        if std::ptr::eq(child, new_child) {
            return Ok(self);
        }

        if child.key() != new_child.key() {
            return Err(Error::invalid_operation(format!(
                "key of child to replace (key='{}') and new child (key='{}') must be equal",
                child.key().unwrap_or_default(),
                new_child.key().unwrap_or_default()
            )));
        }

        self.reload_child_index()?;
        let key = match new_child.key() {
            Some(key) if self.is_linked(Some(key), &child.id) => key,
            key => {
                return Err(Error::invalid_operation(format!(
                    "node (key='{}') doesn't replace any of the existing child nodes",
                    key.unwrap_or_default()
                )));
            }
        };

        let new_id = self.collection.insert(&new_child.record)?;

        let mut updated = self.record.clone();
        updated.child_nodes.insert(key.to_string(), new_id);
        self.commit(updated, &new_id)?;

        log::trace!(
            "Replaced child '{key}' ({}) of node {} with {new_id}",
            child.id,
            self.id
        );
        Ok(self)
    }
}
