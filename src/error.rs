//! Error type for datastore operations.
//!
//! Not-found is never an error here: lookups return `Option`, updates of a
//! missing record still persist, and deletes of a missing record only reset
//! the identity.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entity::EntityId;

/// Errors raised by a repository.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `IdentityEnforced` | `create` with a nonzero id while identity enforcement is on |
/// | `IdentityExhausted` | transient `create` while a stored record already holds `EntityId::MAX` |
/// | `InvalidName` | repository name is empty or would escape the store directory |
/// | `Decode` | store file content is not a collection of the entity type |
/// | `Encode` | the in-memory collection cannot be serialized |
/// | `Io` | store file, backup file or store directory cannot be read or written |
#[derive(Debug, Error)]
pub enum DataStoreError {
    /// A record arrived at `create` carrying its own identity while
    /// enforcement forbids that.
    #[error(
        "instance id {id} not found; cannot create an instance with a nonzero id while identity enforcement is on"
    )]
    IdentityEnforced {
        /// The identity the caller supplied.
        id: EntityId,
    },

    /// No identity above the current maximum is left to assign.
    #[error("cannot assign an id: highest stored id is already {max}")]
    IdentityExhausted {
        /// The highest identity in the collection.
        max: EntityId,
    },

    /// Repository name cannot be used to derive file names.
    #[error("invalid repository name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Store file content could not be decoded.
    #[error("failed to decode store file {}", .path.display())]
    Decode {
        /// Store file that failed to decode.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// Collection could not be encoded.
    #[error("failed to encode collection")]
    Encode(#[source] serde_json::Error),

    /// Filesystem failure.
    #[error("I/O failure on {}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl DataStoreError {
    /// Whether the caller passed an argument the repository refuses.
    ///
    /// Retrying the same call will fail the same way.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::IdentityEnforced { .. } | Self::InvalidName { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = DataStoreError> = std::result::Result<T, E>;
