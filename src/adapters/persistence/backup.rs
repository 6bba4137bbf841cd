//! Backup Policy - Age-based Snapshots of the Store
//!
//! Before each store write, if the store file has not been written for
//! longer than the configured interval, the collection about to be written
//! is also copied to `<Name>.<YYYYMMDD-HHmmss>.bak.json` next to it.
//!
//! Backups are write-only from the repository's point of view and are
//! never pruned.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local, NaiveDateTime};
use tracing::debug;

use super::store_file::StoreFile;
use crate::error::{DataStoreError, Result};
use crate::ports::clock::Clock;

/// Suffix shared by every backup file.
pub const BACKUP_SUFFIX: &str = ".bak.json";

/// Fixed-width local timestamp embedded in backup names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Whether a store last written at `last_write` is due for a backup at `now`.
pub fn is_stale(last_write: DateTime<Local>, interval: Duration, now: DateTime<Local>) -> bool {
    last_write + interval < now
}

/// `<name>.<YYYYMMDD-HHmmss>.bak.json`
pub fn backup_file_name(name: &str, at: DateTime<Local>) -> String {
    format!("{name}.{}{BACKUP_SUFFIX}", at.format(TIMESTAMP_FORMAT))
}

/// Backup settings for one repository.
#[derive(Debug, Clone)]
pub struct BackupPolicy {
    dir: PathBuf,
    name: String,
    /// `None` disables backups.
    interval: Option<Duration>,
}

impl BackupPolicy {
    /// Policy writing `<name>.<timestamp>.bak.json` files into `dir`.
    ///
    /// `interval` of `None` disables backups.
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>, interval: Option<Duration>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            interval,
        }
    }

    /// Whether backups are written at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.interval.is_some()
    }

    /// Write `encoded` as a backup if `store` has gone stale.
    ///
    /// Returns the backup path when one was written. A store file that does
    /// not exist yet counts as stale, so the first write of a new store is
    /// backed up too.
    pub fn consider<K: Clock>(
        &self,
        store: &StoreFile,
        encoded: &str,
        clock: &K,
    ) -> Result<Option<PathBuf>> {
        let Some(interval) = self.interval else {
            return Ok(None);
        };

        let now = clock.now();
        match store.last_modified()? {
            Some(last_write) if !is_stale(last_write, interval, now) => return Ok(None),
            Some(_) => {}
            None => debug!(store = %store.path().display(), "Store file not created yet"),
        }

        let path = self.dir.join(backup_file_name(&self.name, now));
        fs::write(&path, encoded).map_err(|e| DataStoreError::io(&path, e))?;
        Ok(Some(path))
    }

    /// Backup files written for this repository, oldest first.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| DataStoreError::io(&self.dir, e))?;

        let mut backups = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DataStoreError::io(&self.dir, e))?;
            let path = entry.path();
            if self.owns(&path) {
                backups.push(path);
            }
        }

        // Fixed-width timestamps sort chronologically as text.
        backups.sort();
        Ok(backups)
    }

    fn owns(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_prefix(self.name.as_str()))
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|rest| rest.strip_suffix(BACKUP_SUFFIX))
            .is_some_and(|stamp| NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok())
    }
}
