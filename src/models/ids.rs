//! Content-addressed entity identifiers.
//!
//! Every id is a truncated SHA-256 over the entity's identity fields, so
//! loading the same league data twice yields the same ids and snapshots
//! stay reproducible. Truncation keeps ids short enough for tables and
//! log lines.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hash-derived identifier shared by all entity types.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap an already-computed id string.
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Derive an id from identity fields.
    ///
    /// Fields are joined with `|` before hashing, so adjacent fields
    /// cannot run together, and the digest is cut to 16 hex characters.
    pub fn generate(fields: &[&str]) -> Self {
        let digest = Sha256::digest(fields.join("|").as_bytes());
        let hash = hex::encode(digest);
        Self(hash[..16].to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityId").field(&self.0).finish()
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Type alias for player IDs
pub type PlayerId = EntityId;

/// Type alias for match IDs
pub type MatchId = EntityId;

/// Type alias for event IDs
pub type EventId = EntityId;

/// Type alias for league IDs
pub type LeagueId = EntityId;
