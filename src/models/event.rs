//! League event model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, EventId, LeagueId};

/// One night or weekend of league play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier (derived from league + name + date)
    pub id: EventId,

    /// League this event belongs to
    pub league_id: LeagueId,

    /// Event name
    pub name: String,

    /// Date of the event, used for chronological filtering
    pub date: NaiveDate,

    /// Location (venue, city)
    pub location: Option<String>,

    /// Number of rounds
    pub round_count: Option<u32>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Create a new Event with auto-generated ID.
    pub fn new(league_id: LeagueId, name: String, date: NaiveDate) -> Self {
        let id = EntityId::generate(&[league_id.as_str(), &name, &date.to_string()]);

        Self {
            id,
            league_id,
            name,
            date,
            location: None,
            round_count: None,
            created_at: Utc::now(),
        }
    }

    /// Builder method to set location.
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    /// Builder method to set round count.
    pub fn with_round_count(mut self, count: u32) -> Self {
        self.round_count = Some(count);
        self
    }
}
