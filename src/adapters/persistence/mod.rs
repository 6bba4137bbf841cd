//! Persistence Adapters - JSON Flat-file Storage
//!
//! Implements the `CrudProvider` port over a single JSON file per
//! repository, with age-based backup snapshots beside it.
//! No database dependency: one file, rewritten whole on every change.

pub mod backup;
pub mod codec;
pub mod json_repository;
pub mod store_file;

pub use backup::BackupPolicy;
pub use json_repository::{JsonRepository, STORE_SUFFIX};
pub use store_file::StoreFile;
