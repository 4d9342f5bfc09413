//! The backing collection contract.

use std::sync::Arc;

use crate::error::StoreError;
use crate::record::{NodeRecord, RecordId};

/// A collection of whole [`NodeRecord`] documents.
///
/// This is the contract a document-store driver has to fulfil to back
/// [`DocumentNode`](crate::DocumentNode)s. Records are only ever read and
/// written whole; there is no partial update.
///
/// Methods take `&self`: a collection is a handle shared by every node
/// wrapper built on it.
pub trait NodeCollection {
    /// Store a new record and return its identifier.
    ///
    /// A record without identifier gets a fresh one.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateId`] if a record with the same identifier exists.
    fn insert(&self, record: &NodeRecord) -> Result<RecordId, StoreError>;

    /// Overwrite the stored record carrying the same identifier.
    ///
    /// # Errors
    ///
    /// [`StoreError::MissingId`] if `record` has no identifier,
    /// [`StoreError::RecordNotFound`] if nothing is stored under it.
    fn update(&self, record: &NodeRecord) -> Result<(), StoreError>;

    /// Delete a record. Returns `true` iff a record existed and was removed.
    fn delete(&self, id: &RecordId) -> Result<bool, StoreError>;

    fn find_by_id(&self, id: &RecordId) -> Result<Option<NodeRecord>, StoreError>;

    /// All records matching `predicate`.
    fn find(&self, predicate: &dyn Fn(&NodeRecord) -> bool) -> Result<Vec<NodeRecord>, StoreError>;
}

// Blanket implementations for references and shared handles

impl<T: NodeCollection + ?Sized> NodeCollection for &T {
    fn insert(&self, record: &NodeRecord) -> Result<RecordId, StoreError> {
        (**self).insert(record)
    }

    fn update(&self, record: &NodeRecord) -> Result<(), StoreError> {
        (**self).update(record)
    }

    fn delete(&self, id: &RecordId) -> Result<bool, StoreError> {
        (**self).delete(id)
    }

    fn find_by_id(&self, id: &RecordId) -> Result<Option<NodeRecord>, StoreError> {
        (**self).find_by_id(id)
    }

    fn find(&self, predicate: &dyn Fn(&NodeRecord) -> bool) -> Result<Vec<NodeRecord>, StoreError> {
        (**self).find(predicate)
    }
}

impl<T: NodeCollection + ?Sized> NodeCollection for Arc<T> {
    fn insert(&self, record: &NodeRecord) -> Result<RecordId, StoreError> {
        self.as_ref().insert(record)
    }

    fn update(&self, record: &NodeRecord) -> Result<(), StoreError> {
        self.as_ref().update(record)
    }

    fn delete(&self, id: &RecordId) -> Result<bool, StoreError> {
        self.as_ref().delete(id)
    }

    fn find_by_id(&self, id: &RecordId) -> Result<Option<NodeRecord>, StoreError> {
        self.as_ref().find_by_id(id)
    }

    fn find(&self, predicate: &dyn Fn(&NodeRecord) -> bool) -> Result<Vec<NodeRecord>, StoreError> {
        self.as_ref().find(predicate)
    }
}
