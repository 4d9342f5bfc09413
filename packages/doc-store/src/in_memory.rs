//! In-memory node collection.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::collection::NodeCollection;
use crate::error::StoreError;
use crate::record::{NodeRecord, RecordId};

/// A [`NodeCollection`] holding its records in memory.
///
/// Clones share the same records, so a clone can be handed to every node
/// wrapper of one tree.
///
/// # Example
///
/// ```rust
/// use structfs_doc_store::{InMemoryCollection, NodeCollection, NodeRecord};
///
/// let collection = InMemoryCollection::new();
/// let id = collection.insert(&NodeRecord::with_key("a")).unwrap();
///
/// let stored = collection.find_by_id(&id).unwrap().unwrap();
/// assert_eq!(stored.id, Some(id));
/// assert_eq!(stored.key.as_deref(), Some("a"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryCollection {
    records: Arc<RwLock<BTreeMap<RecordId, NodeRecord>>>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<RecordId, NodeRecord>>, StoreError> {
        self.records.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<RecordId, NodeRecord>>, StoreError> {
        self.records.write().map_err(|_| StoreError::Poisoned)
    }
}

impl NodeCollection for InMemoryCollection {
    fn insert(&self, record: &NodeRecord) -> Result<RecordId, StoreError> {
        let id = record.id.unwrap_or_default();
        let mut records = self.write()?;
        if records.contains_key(&id) {
            return Err(StoreError::DuplicateId { id });
        }

        let mut stored = record.clone();
        stored.id = Some(id);
        records.insert(id, stored);
        Ok(id)
    }

    fn update(&self, record: &NodeRecord) -> Result<(), StoreError> {
        let id = record.id.ok_or(StoreError::MissingId)?;
        let mut records = self.write()?;
        match records.get_mut(&id) {
            Some(stored) => {
                *stored = record.clone();
                Ok(())
            }
            None => Err(StoreError::RecordNotFound { id }),
        }
    }

    fn delete(&self, id: &RecordId) -> Result<bool, StoreError> {
        Ok(self.write()?.remove(id).is_some())
    }

    fn find_by_id(&self, id: &RecordId) -> Result<Option<NodeRecord>, StoreError> {
        Ok(self.read()?.get(id).cloned())
    }

    fn find(&self, predicate: &dyn Fn(&NodeRecord) -> bool) -> Result<Vec<NodeRecord>, StoreError> {
        Ok(self
            .read()?
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }
}
