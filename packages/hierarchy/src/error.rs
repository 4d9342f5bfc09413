//! Error types for traversal and structural edits.

use std::fmt::Display;

use crate::path::HierarchyPath;

/// Errors raised by the strict traversal operations and by structural edits.
///
/// Lenient operations (`try_get_descendant_at`, `descend_along_path`, ...)
/// never produce [`Error::NotFound`]; they report a miss through their
/// return value instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A key along a path could not be resolved.
    ///
    /// `path` holds the keys consumed up to and including the failing one,
    /// joined with `/`.
    #[error("key not found: '{path}'")]
    NotFound { path: String },

    /// A required argument was not supplied.
    #[error("required argument is missing: {name}")]
    InvalidArgument { name: &'static str },

    /// A structural-edit precondition was violated.
    #[error("{message}")]
    InvalidOperation { message: String },

    /// The backing storage failed.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn not_found<K: Display>(path: &HierarchyPath<K>) -> Self {
        Error::NotFound {
            path: path.to_string(),
        }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Error::InvalidOperation {
            message: message.into(),
        }
    }

    /// Whether this error reports an unresolved key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
