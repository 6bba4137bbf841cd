//! Identity assignment policy.
//!
//! Pure functions over the in-memory collection, kept apart from file I/O so
//! they can be property-tested in isolation.
//!
//! Rules:
//! - a transient record gets `1` in an empty collection, else `max + 1`
//! - when `max` is already `EntityId::MAX` there is no next identity
//! - a record arriving with its own identity is rejected outright when
//!   enforcement is on, and accepted as-is (duplicates included) when off

use super::entity::{Entity, EntityId};

/// Outcome of checking a record before it is appended by `create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateDecision {
    /// Record is transient; give it this identity.
    Assign(EntityId),
    /// Record keeps the identity it arrived with.
    Keep,
    /// Record carries an identity and enforcement forbids that.
    Reject,
    /// Record is transient but the highest stored identity is `EntityId::MAX`.
    Exhausted,
}

/// Next identity for a transient record appended to `items`.
///
/// Never reuses an identity still present in `items`, but an identity freed
/// by a delete can come back once the maximum drops below it again.
///
/// Returns `None` when the maximum has no successor.
pub fn next_id<T: Entity>(items: &[T]) -> Option<EntityId> {
    match items.iter().map(Entity::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Decide how `create` treats `candidate` given the current collection.
///
/// Enforcement does not look the identity up: any nonzero identity is
/// rejected, whether or not a record with it exists.
pub fn check_create<T: Entity>(
    items: &[T],
    candidate: &T,
    enforce_identity: bool,
) -> CreateDecision {
    if candidate.is_transient() {
        next_id(items).map_or(CreateDecision::Exhausted, CreateDecision::Assign)
    } else if enforce_identity {
        CreateDecision::Reject
    } else {
        CreateDecision::Keep
    }
}

/// Position of the first record with identity `id`.
pub fn position_of<T: Entity>(items: &[T], id: EntityId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
