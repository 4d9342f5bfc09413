use std::io;
use std::path::PathBuf;

use crate::record::RecordId;

/// Errors raised by a [`NodeCollection`](crate::NodeCollection).
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("a record with id '{id}' already exists")]
    DuplicateId { id: RecordId },

    #[error("no record with id '{id}'")]
    RecordNotFound { id: RecordId },

    #[error("record has no id")]
    MissingId,

    #[error("root path {path:?} is invalid: {error}")]
    RootPathInvalid {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("collection lock was poisoned")]
    Poisoned,
}

impl From<StoreError> for structfs_hierarchy::Error {
    fn from(error: StoreError) -> Self {
        structfs_hierarchy::Error::Storage(Box::new(error))
    }
}
