//! JSON Repository - File-backed `CrudProvider`
//!
//! Holds one collection in memory and mirrors it to
//! `<dir>/<Name>.datastore.json`. The file is the source of truth: reads
//! reload it, writes rewrite it whole.
//!
//! Write path:
//! 1. Mutate the in-memory collection
//! 2. Encode it
//! 3. Back the encoding up if the store file has gone stale
//! 4. Replace the store file with the encoding

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::backup::BackupPolicy;
use super::codec;
use super::store_file::StoreFile;
use crate::config::StoreConfig;
use crate::domain::entity::{Entity, EntityId, UNASSIGNED_ID};
use crate::domain::identity::{CreateDecision, check_create, position_of};
use crate::error::{DataStoreError, Result};
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::crud::CrudProvider;

/// Suffix appended to the repository name to form the store file name.
pub const STORE_SUFFIX: &str = ".datastore.json";

/// Flat-file repository for one collection of `T`.
///
/// Not safe to share between threads without external locking, and two
/// repositories pointed at the same file overwrite each other's changes
/// (last writer wins).
#[derive(Debug)]
pub struct JsonRepository<T, K = SystemClock> {
    /// Logical name used for the store and backup file names.
    name: String,
    store: StoreFile,
    backup: BackupPolicy,
    enforce_identity: bool,
    clock: K,
    /// Collection as last loaded, plus any pending mutation.
    data: Vec<T>,
}

impl<T> JsonRepository<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
{
    /// Open (or create) the store named `name` under `config.store_path`.
    ///
    /// # Errors
    /// - `InvalidName` if `name` cannot be used as a file name stem
    /// - `Io` if the directory or store file cannot be created or read
    /// - `Decode` if an existing store file is not a collection of `T`
    pub fn open(name: impl Into<String>, config: &StoreConfig) -> Result<Self> {
        Self::with_clock(name, config, SystemClock)
    }
}

impl<T, K> JsonRepository<T, K>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
    K: Clock,
{
    /// Like [`JsonRepository::open`], with an explicit time source for
    /// backup staleness.
    pub fn with_clock(name: impl Into<String>, config: &StoreConfig, clock: K) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        let dir = &config.store_path;
        fs::create_dir_all(dir).map_err(|e| DataStoreError::io(dir, e))?;

        let mut repo = Self {
            store: StoreFile::new(dir.join(format!("{name}{STORE_SUFFIX}"))),
            backup: BackupPolicy::new(dir, name.as_str(), config.backup_interval()),
            enforce_identity: config.enforce_identity,
            clock,
            data: Vec::new(),
            name,
        };
        repo.refresh()?;

        info!(
            repository = %repo.name,
            store = %repo.store.path().display(),
            records = repo.data.len(),
            backups = repo.backup.is_enabled(),
            enforce_identity = repo.enforce_identity,
            "Repository opened"
        );

        Ok(repo)
    }

    /// Logical name the store and backup file names derive from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the store file backing this repository.
    pub fn store_file(&self) -> &Path {
        self.store.path()
    }

    /// Backup files written so far for this repository, oldest first.
    pub fn backups(&self) -> Result<Vec<PathBuf>> {
        self.backup.list()
    }

    /// Replace the in-memory collection with the store file's content.
    ///
    /// A missing or blank store file becomes an empty collection and is
    /// written out immediately, so the file exists from here on.
    #[instrument(skip(self), fields(repository = %self.name))]
    pub fn refresh(&mut self) -> Result<()> {
        match self.store.read()? {
            Some(content) => {
                self.data = codec::decode(self.store.path(), &content)?;
                debug!(records = self.data.len(), "Store loaded");
                Ok(())
            }
            None => {
                info!(store = %self.store.path().display(), "Initializing empty store");
                self.data = Vec::new();
                self.persist()
            }
        }
    }

    fn persist(&self) -> Result<()> {
        let encoded = codec::encode(&self.data)?;

        if let Some(path) = self.backup.consider(&self.store, &encoded, &self.clock)? {
            info!(
                repository = %self.name,
                backup = %path.display(),
                records = self.data.len(),
                "Backup written"
            );
        }

        self.store.write(&encoded)?;
        debug!(repository = %self.name, records = self.data.len(), "Store persisted");
        Ok(())
    }
}

impl<T, K> CrudProvider<T> for JsonRepository<T, K>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
    K: Clock,
{
    fn read_all(&mut self) -> Result<&[T]> {
        self.refresh()?;
        Ok(&self.data)
    }

    fn read(&mut self, id: EntityId) -> Result<Option<&T>> {
        self.refresh()?;
        Ok(self.data.iter().find(|item| item.id() == id))
    }

    /// Appends to the collection as last loaded; no reload happens first.
    #[instrument(skip(self, instance), fields(repository = %self.name, id = instance.id()))]
    fn create(&mut self, mut instance: T) -> Result<T> {
        match check_create(&self.data, &instance, self.enforce_identity) {
            CreateDecision::Assign(id) => instance.set_id(id),
            CreateDecision::Keep => {}
            CreateDecision::Reject => {
                warn!("Rejected create of pre-identified instance");
                return Err(DataStoreError::IdentityEnforced { id: instance.id() });
            }
            CreateDecision::Exhausted => {
                warn!("No identity left above the stored maximum");
                return Err(DataStoreError::IdentityExhausted { max: EntityId::MAX });
            }
        }

        self.data.push(instance.clone());
        self.persist()?;
        debug!(assigned = instance.id(), "Instance created");
        Ok(instance)
    }

    #[instrument(skip(self, instance), fields(repository = %self.name, id = instance.id()))]
    fn update(&mut self, instance: T) -> Result<T> {
        self.refresh()?;
        match position_of(&self.data, instance.id()) {
            Some(index) => self.data[index] = instance.clone(),
            None => debug!("No record matched, rewriting store unchanged"),
        }

        self.persist()?;
        Ok(instance)
    }

    #[instrument(skip(self, doomed), fields(repository = %self.name, id = doomed.id()))]
    fn delete(&mut self, mut doomed: T) -> Result<T> {
        self.refresh()?;
        if let Some(index) = position_of(&self.data, doomed.id()) {
            self.data.remove(index);
            self.persist()?;
        }

        doomed.set_id(UNASSIGNED_ID);
        Ok(doomed)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name == "." || name == ".." {
        "name refers to a directory"
    } else if name.contains(['/', '\\']) {
        "name contains a path separator"
    } else {
        return Ok(());
    };
    Err(DataStoreError::InvalidName {
        name: name.to_string(),
        reason,
    })
}
