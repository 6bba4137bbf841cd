//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) callers program against and the
//! collaborators a repository needs from the outside world.
//!
//! Port categories:
//! - `CrudProvider`: list/read/create/update/delete over one collection
//! - `Clock`: source of "now" for backup staleness and backup names

pub mod clock;
pub mod crud;

pub use clock::{Clock, SystemClock};
pub use crud::CrudProvider;
