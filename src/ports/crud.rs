//! CRUD Port - Collection Access Interface
//!
//! The operation surface callers program against. Every read reloads the
//! collection from its backing store; every write rewrites it in full.
//!
//! Operations take `&mut self`: a provider has exactly one logical owner
//! at a time, and callers sharing one across threads must serialize access
//! themselves.

use crate::domain::entity::{Entity, EntityId};
use crate::error::Result;

/// Create/read/update/delete over one collection of `T`.
pub trait CrudProvider<T: Entity> {
  /// Reload, then view every record in stored order.
  ///
  /// The slice is a fresh snapshot per call; iterate it as often as needed.
  fn read_all(&mut self) -> Result<&[T]>;

  /// Reload, then find the first record with identity `id`.
  fn read(&mut self, id: EntityId) -> Result<Option<&T>>;

  /// Append `instance`, assigning an identity when it has none.
  ///
  /// # Errors
  /// `DataStoreError::IdentityEnforced` when `instance` carries a nonzero
  /// identity and enforcement is on.
  fn create(&mut self, instance: T) -> Result<T>;

  /// Replace the record sharing `instance`'s identity, keeping its position.
  ///
  /// Persists even when no record matched.
  fn update(&mut self, instance: T) -> Result<T>;

  /// Remove the record sharing `doomed`'s identity.
  ///
  /// Always hands `doomed` back with its identity reset to zero. Nothing is
  /// written when no record matched.
  fn delete(&mut self, doomed: T) -> Result<T>;

  /// Insert-or-update keyed on identity.
  ///
  /// - transient → `create`
  /// - identity present in the store → `update`
  /// - identity absent → `create` (fails under enforcement)
  fn save(&mut self, instance: T) -> Result<T> {
    if instance.is_transient() {
      return self.create(instance);
    }
    if self.read(instance.id())?.is_some() {
      self.update(instance)
    } else {
      self.create(instance)
    }
  }
}
