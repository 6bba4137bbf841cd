//! Domain layer - entity contract and identity policy.
//!
//! No file I/O here. Everything in this module works on in-memory
//! collections and is testable in isolation.

pub mod employee;
pub mod entity;
pub mod identity;

// Re-export core types for convenience
pub use employee::Employee;
pub use entity::{Entity, EntityId, UNASSIGNED_ID};
pub use identity::{CreateDecision, check_create, next_id, position_of};
