//! Store File - Whole-file Reads and Atomic Rewrites
//!
//! Every write replaces the entire file: content goes to a sibling
//! `.tmp` file which is then renamed over the store file, so readers see
//! either the old collection or the new one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::warn;

use crate::error::{DataStoreError, Result};

/// Handle on one repository's store file.
#[derive(Debug, Clone)]
pub struct StoreFile {
    /// Path to `<Name>.datastore.json`.
    path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
}

impl StoreFile {
    /// Handle on the store file at `path`; nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        Self {
            path,
            tmp_path: PathBuf::from(tmp),
        }
    }

    /// Location of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full content of the store file.
    ///
    /// Returns `None` when the file is missing or holds only whitespace.
    pub fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DataStoreError::io(&self.path, e)),
        }
    }

    /// Replace the store file with `content` (tmp → rename).
    ///
    /// A failed rename removes the tmp file again.
    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.tmp_path, content).map_err(|e| DataStoreError::io(&self.tmp_path, e))?;

        if let Err(e) = fs::rename(&self.tmp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&self.tmp_path) {
                warn!(
                    tmp = %self.tmp_path.display(),
                    error = %cleanup,
                    "Failed to remove tmp store file"
                );
            }
            return Err(DataStoreError::io(&self.path, e));
        }
        Ok(())
    }

    /// Last-modified time of the store file, `None` if it does not exist yet.
    pub fn last_modified(&self) -> Result<Option<DateTime<Local>>> {
        match fs::metadata(&self.path).and_then(|meta| meta.modified()) {
            Ok(modified) => Ok(Some(DateTime::<Local>::from(modified))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DataStoreError::io(&self.path, e)),
        }
    }
}
