//! JSON File Datastore — Library Root
//!
//! Embedded CRUD persistence for small collections of identified records,
//! one JSON file per collection, with optional age-based backups.
//!
//! ```no_run
//! use jsonfile_datastore::{CrudProvider, Employee, JsonRepository, StoreConfig};
//!
//! # fn main() -> jsonfile_datastore::Result<()> {
//! let config = StoreConfig::new("data").with_backup_minutes(5);
//! let mut staff = JsonRepository::<Employee>::open("Employee", &config)?;
//! let hired = staff.create(Employee::new("Englebert Humperdink"))?;
//! assert_eq!(hired.id, 1);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

pub use adapters::persistence::JsonRepository;
pub use config::StoreConfig;
pub use domain::{Employee, Entity, EntityId, UNASSIGNED_ID};
pub use error::{DataStoreError, Result};
pub use ports::{Clock, CrudProvider, SystemClock};
