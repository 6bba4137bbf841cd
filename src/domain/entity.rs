//! Entity contract — the capability every storable record exposes.
//!
//! The repository reads, compares, assigns and clears identities through
//! this trait and nothing else. All other fields of an entity pass through
//! encode/decode untouched.

/// Integer identity of a stored record.
pub type EntityId = i64;

/// Identity of a record that has not been durably assigned one yet.
pub const UNASSIGNED_ID: EntityId = 0;

/// A record with a mutable integer identity.
///
/// `id() == UNASSIGNED_ID` marks a transient instance. Any other value is the
/// durable key of the record within one repository's collection.
pub trait Entity {
    /// Current identity of the record.
    fn id(&self) -> EntityId;

    /// Replace the identity of the record.
    fn set_id(&mut self, id: EntityId);

    /// Whether the record still carries the unassigned identity.
    fn is_transient(&self) -> bool {
        self.id() == UNASSIGNED_ID
    }
}
