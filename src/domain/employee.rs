//! Sample entity used by the console harness and tests.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, UNASSIGNED_ID};

/// A staff record. Only `id` is meaningful to the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Durable identity (0 until created).
    #[serde(rename = "ID")]
    pub id: EntityId,
    /// Display name.
    #[serde(rename = "Name")]
    pub name: String,
}

impl Employee {
    /// Transient employee awaiting an identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(UNASSIGNED_ID, name)
    }

    /// Employee carrying an explicit identity.
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Employee {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
