//! League model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, LeagueId, ScoringSystem};

/// A recurring league: a series of events ranked under one scoring system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    /// Unique identifier (derived from name)
    pub id: LeagueId,

    /// League name
    pub name: String,

    /// Scoring configuration; leagues without one rank under a default
    /// the caller supplies
    pub scoring: Option<ScoringSystem>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl League {
    /// Create a new League with auto-generated ID.
    pub fn new(name: String) -> Self {
        let id = EntityId::generate(&[&name]);

        Self {
            id,
            name,
            scoring: None,
            created_at: Utc::now(),
        }
    }

    /// Builder method to set the scoring system.
    pub fn with_scoring(mut self, scoring: ScoringSystem) -> Self {
        self.scoring = Some(scoring);
        self
    }

    /// The scoring system to rank with: the league's own, or the supplied
    /// default when none is configured.
    pub fn scoring_or<'a>(&'a self, default: &'a ScoringSystem) -> &'a ScoringSystem {
        self.scoring.as_ref().unwrap_or(default)
    }
}
