//! League player model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, LeagueId, PlayerId};

/// A player registered in a league.
///
/// Identity plus display name; ranking never mutates a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier (derived from league + name)
    pub id: PlayerId,

    /// League this player is registered in
    pub league_id: LeagueId,

    /// Display name
    pub name: String,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Create a new Player with auto-generated ID.
    pub fn new(league_id: LeagueId, name: String) -> Self {
        let id = EntityId::generate(&[league_id.as_str(), &name]);

        Self {
            id,
            league_id,
            name,
            created_at: Utc::now(),
        }
    }
}
