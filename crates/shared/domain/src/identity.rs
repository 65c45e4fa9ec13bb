//! Opaque entity identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique identity token shared by every entity.
///
/// The value is treated as opaque: ids loaded from storage are wrapped
/// as-is, and only [`UniqueEntityId::generate`] decides the format of new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueEntityId(String);

impl UniqueEntityId {
    /// Issue a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier issued earlier, e.g. one read back from storage
    pub fn from_existing(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn equals(&self, other: &UniqueEntityId) -> bool {
        self == other
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Uuid> for UniqueEntityId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}
