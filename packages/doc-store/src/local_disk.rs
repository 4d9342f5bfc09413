//! Node collection persisted as JSON files in a directory.

use std::{fs, io, path};

use walkdir::WalkDir;

use crate::collection::NodeCollection;
use crate::error::StoreError;
use crate::record::{NodeRecord, RecordId};

const RECORD_EXTENSION: &str = "json";

/// A [`NodeCollection`] storing each record as `<root>/<id>.json`.
///
/// Records are written as pretty-printed JSON. Files in the root directory
/// that do not look like records are ignored.
#[derive(Clone, Debug)]
pub struct JsonDirCollection {
    root: path::PathBuf,
}

impl JsonDirCollection {
    /// Open a collection rooted at an existing, writable directory.
    pub fn new(root: path::PathBuf) -> Result<JsonDirCollection, StoreError> {
        match Self::checked_root(&root) {
            Ok(root) => Ok(JsonDirCollection { root }),
            Err(error) => Err(StoreError::RootPathInvalid { path: root, error }),
        }
    }

    /// Canonical form of `root`, which must be a writable directory.
    fn checked_root(root: &path::Path) -> io::Result<path::PathBuf> {
        let attr = fs::metadata(root)?;
        if !attr.is_dir() {
            return Err(io::Error::other("not a directory"));
        }
        if attr.permissions().readonly() {
            return Err(io::Error::other("directory is read-only"));
        }
        root.canonicalize()
    }

    pub fn root(&self) -> &path::Path {
        &self.root
    }

    fn record_path(&self, id: &RecordId) -> path::PathBuf {
        self.root.join(format!("{id}.{RECORD_EXTENSION}"))
    }

    fn read_record(file_path: &path::Path) -> Result<NodeRecord, StoreError> {
        log::debug!("Reading {}...", file_path.display());
        let data = fs::read(file_path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn write_record(file_path: &path::Path, record: &NodeRecord) -> Result<(), StoreError> {
        log::debug!("Writing {}...", file_path.display());
        let data = serde_json::to_vec_pretty(record)?;
        fs::write(file_path, data)?;
        Ok(())
    }

    fn is_record_file(file_path: &path::Path) -> bool {
        file_path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXTENSION)
            && file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|s| s.parse::<RecordId>().is_ok())
    }
}

impl NodeCollection for JsonDirCollection {
    fn insert(&self, record: &NodeRecord) -> Result<RecordId, StoreError> {
        let id = record.id.unwrap_or_default();
        let file_path = self.record_path(&id);
        if file_path.exists() {
            return Err(StoreError::DuplicateId { id });
        }

        let mut stored = record.clone();
        stored.id = Some(id);
        Self::write_record(&file_path, &stored)?;
        Ok(id)
    }

    fn update(&self, record: &NodeRecord) -> Result<(), StoreError> {
        let id = record.id.ok_or(StoreError::MissingId)?;
        let file_path = self.record_path(&id);
        if !file_path.is_file() {
            return Err(StoreError::RecordNotFound { id });
        }

        Self::write_record(&file_path, record)
    }

    fn delete(&self, id: &RecordId) -> Result<bool, StoreError> {
        let file_path = self.record_path(id);
        match fs::remove_file(&file_path) {
            Ok(()) => {
                log::debug!("Removed {}", file_path.display());
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_id(&self, id: &RecordId) -> Result<Option<NodeRecord>, StoreError> {
        let file_path = self.record_path(id);
        if !file_path.is_file() {
            return Ok(None);
        }

        Self::read_record(&file_path).map(Some)
    }

    fn find(&self, predicate: &dyn Fn(&NodeRecord) -> bool) -> Result<Vec<NodeRecord>, StoreError> {
        let mut found = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() || !Self::is_record_file(entry.path()) {
                continue;
            }

            let record = Self::read_record(entry.path())?;
            if predicate(&record) {
                found.push(record);
            }
        }

        Ok(found)
    }
}
