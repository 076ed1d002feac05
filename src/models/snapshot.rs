//! Snapshot containers for ranking input.
//!
//! A [`LeagueSnapshot`] is the complete, self-contained input to a ranking
//! run: the league, its player registry, and its events with their match
//! records. Snapshots are plain data and carry no behavior beyond lookup
//! and date filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Event, League, Match, Player, PlayerId};

/// One event and its match records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSnapshot {
    /// Event metadata
    pub event: Event,

    /// Explicit participant list; derived from matches when empty
    #[serde(default)]
    pub roster: Vec<PlayerId>,

    /// Match records for this event
    pub matches: Vec<Match>,
}

impl EventSnapshot {
    /// Participant ids for this event.
    ///
    /// Uses the explicit roster when one is given, otherwise derives the
    /// list from match records in order of first appearance.
    pub fn participant_ids(&self) -> Vec<PlayerId> {
        if !self.roster.is_empty() {
            return self.roster.clone();
        }

        let mut ids: Vec<PlayerId> = Vec::new();
        for m in &self.matches {
            if !ids.contains(&m.player1_id) {
                ids.push(m.player1_id.clone());
            }
            if !ids.contains(&m.player2_id) {
                ids.push(m.player2_id.clone());
            }
        }
        ids
    }
}

/// Complete ranking input for one league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    /// League metadata, including any custom scoring system
    pub league: League,

    /// Player registry
    pub players: Vec<Player>,

    /// Events with their match records
    pub events: Vec<EventSnapshot>,
}

impl LeagueSnapshot {
    /// Create a new snapshot.
    pub fn new(league: League, players: Vec<Player>, events: Vec<EventSnapshot>) -> Self {
        Self {
            league,
            players,
            events,
        }
    }

    /// A copy of this snapshot restricted to events on or before `cutoff`.
    pub fn through(&self, cutoff: NaiveDate) -> LeagueSnapshot {
        let mut snapshot = self.clone();
        snapshot.events.retain(|e| e.event.date <= cutoff);
        snapshot
    }

    /// Look up a player in the registry.
    pub fn find_player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *player_id)
    }

    /// Find an event by id or name. Names match case-insensitively.
    pub fn find_event(&self, query: &str) -> Option<&EventSnapshot> {
        self.events.iter().find(|e| {
            e.event.id.as_str() == query || e.event.name.eq_ignore_ascii_case(query)
        })
    }

    /// Resolve an event's participants against the player registry.
    /// Unknown ids are dropped here; the aggregation step reports them.
    pub fn event_players(&self, event: &EventSnapshot) -> Vec<Player> {
        let mut players = Vec::new();
        for id in event.participant_ids() {
            match self.find_player(&id) {
                Some(player) => players.push(player.clone()),
                None => {
                    debug!(
                        "Participant {} not in player registry (event: {})",
                        id, event.event.name
                    );
                }
            }
        }
        players
    }
}
