//! Object ID generation and management

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an object in the scripture model.
/// Uses UUID v4 for globally unique, stable IDs that survive serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjId(Uuid);

impl ObjId {
    /// Create a new random ObjId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ObjId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Create an ObjId from a string representation
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for ObjId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ObjId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ObjId> for Uuid {
    fn from(id: ObjId) -> Self {
        id.0
    }
}
