//! Derived standings models.
//!
//! Everything here is recomputed from match records on every ranking call;
//! nothing is persisted or cached.

use serde::{Deserialize, Serialize};

use super::{EventId, LeagueId, MatchId, PlayerId};

/// Raw per-player counters accumulated from match records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub matches_won: u32,
    pub matches_lost: u32,
    pub matches_drawn: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub games_drawn: u32,
}

impl MatchTally {
    /// Record a won match with its game scores.
    pub fn record_win(&mut self, games_for: u32, games_against: u32) {
        self.matches_won += 1;
        self.games_won += games_for;
        self.games_lost += games_against;
    }

    /// Record a lost match with its game scores.
    pub fn record_loss(&mut self, games_for: u32, games_against: u32) {
        self.matches_lost += 1;
        self.games_won += games_for;
        self.games_lost += games_against;
    }

    /// Record a drawn match. Counts one drawn game alongside the scored
    /// games: the match record has no per-game draw field, so the drawn
    /// match itself stands in for it.
    pub fn record_draw(&mut self, games_for: u32, games_against: u32) {
        self.matches_drawn += 1;
        self.games_won += games_for;
        self.games_lost += games_against;
        self.games_drawn += 1;
    }

    /// Total matches played.
    pub fn matches_played(&self) -> u32 {
        self.matches_won + self.matches_lost + self.matches_drawn
    }

    /// Total games played.
    pub fn games_played(&self) -> u32 {
        self.games_won + self.games_lost + self.games_drawn
    }

    /// Win-loss-draw view of the match counters.
    pub fn record(&self) -> Record {
        Record::new(self.matches_won, self.matches_lost, self.matches_drawn)
    }
}

/// Win/loss/draw record summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Record {
    /// Create a new record.
    pub fn new(wins: u32, losses: u32, draws: u32) -> Self {
        Self {
            wins,
            losses,
            draws,
        }
    }

    /// Total matches played.
    pub fn total_matches(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.draws)
    }
}

/// Fully normalized per-player statistics within one scope.
///
/// Percentages are points-based and floored; see the calculation engine for
/// the exact rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Raw counters
    pub tally: MatchTally,

    /// 3 per match won, 1 per match drawn
    pub match_points: u32,

    /// 3 per game won, 1 per game drawn
    pub game_points: u32,

    /// Floored match-win percentage (0.0 to 1.0)
    pub match_win_percentage: f64,

    /// Floored game-win percentage (0.0 to 1.0)
    pub game_win_percentage: f64,

    /// Average of opponents' match-win percentages, one sample per match
    pub opponents_match_win_percentage: f64,

    /// Average of opponents' game-win percentages, one sample per match
    pub opponents_game_win_percentage: f64,
}

/// One row of an event's standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStanding {
    /// 1-indexed; shared only when every comparator including name ties
    pub rank: u32,

    /// Player identity
    pub player_id: PlayerId,

    /// Player display name
    pub player_name: String,

    /// Event-scope statistics
    pub stats: PlayerStats,
}

impl EventStanding {
    /// Check if this is the event win (1st place).
    pub fn is_winner(&self) -> bool {
        self.rank == 1
    }

    /// Check if this is a podium finish (top 3).
    pub fn is_podium(&self) -> bool {
        self.rank <= 3
    }
}

/// Podium finish counts across a league's events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodiumCounts {
    pub first: u32,
    pub second: u32,
    pub third: u32,
}

/// Aggregated league-scope figures for one player, before ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaguePlayerStats {
    /// Player identity
    pub player_id: PlayerId,

    /// Player display name
    pub player_name: String,

    /// Formula-derived score
    pub league_points: i64,

    /// Events the player appeared at
    pub events_attended: u32,

    /// Podium finish counts
    pub placements: PodiumCounts,

    /// Statistics over all league matches
    pub stats: PlayerStats,
}

/// One row of a league's standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueStanding {
    /// 1-indexed; shared only when every comparator including name ties
    pub rank: u32,

    /// Player identity
    pub player_id: PlayerId,

    /// Player display name
    pub player_name: String,

    /// Formula-derived score
    pub league_points: i64,

    /// Events the player appeared at
    pub events_attended: u32,

    /// Podium finish counts
    pub placements: PodiumCounts,

    /// Statistics over all league matches
    pub stats: PlayerStats,
}

impl LeagueStanding {
    /// Attach a rank to aggregated player figures.
    pub fn new(rank: u32, player: LeaguePlayerStats) -> Self {
        Self {
            rank,
            player_id: player.player_id,
            player_name: player.player_name,
            league_points: player.league_points,
            events_attended: player.events_attended,
            placements: player.placements,
            stats: player.stats,
        }
    }
}

/// Event standings plus any integrity warnings hit while computing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStandings {
    /// Event these standings belong to
    pub event_id: EventId,

    /// Rows in rank order
    pub standings: Vec<EventStanding>,

    /// Non-fatal data problems encountered
    pub warnings: Vec<DataWarning>,
}

impl EventStandings {
    /// The event winner, if anyone is ranked.
    pub fn winner(&self) -> Option<&EventStanding> {
        self.standings.first()
    }

    /// Look up a player's row.
    pub fn get(&self, player_id: &PlayerId) -> Option<&EventStanding> {
        self.standings.iter().find(|s| s.player_id == *player_id)
    }

    /// Rows with podium finishes (top 3).
    pub fn podium(&self) -> Vec<&EventStanding> {
        self.standings.iter().filter(|s| s.is_podium()).collect()
    }
}

/// League standings plus any integrity warnings hit while computing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueStandings {
    /// League these standings belong to
    pub league_id: LeagueId,

    /// Rows in rank order
    pub standings: Vec<LeagueStanding>,

    /// Non-fatal data problems encountered
    pub warnings: Vec<DataWarning>,
}

impl LeagueStandings {
    /// The league leader, if anyone is ranked.
    pub fn leader(&self) -> Option<&LeagueStanding> {
        self.standings.first()
    }

    /// Look up a player's row.
    pub fn get(&self, player_id: &PlayerId) -> Option<&LeagueStanding> {
        self.standings.iter().find(|s| s.player_id == *player_id)
    }
}

/// A computed ranking, tagged by scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum Standings {
    Event(EventStandings),
    League(LeagueStandings),
}

impl Standings {
    /// Number of ranked rows.
    pub fn len(&self) -> usize {
        match self {
            Standings::Event(s) => s.standings.len(),
            Standings::League(s) => s.standings.len(),
        }
    }

    /// Whether no one is ranked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Integrity warnings from the computation.
    pub fn warnings(&self) -> &[DataWarning] {
        match self {
            Standings::Event(s) => &s.warnings,
            Standings::League(s) => &s.warnings,
        }
    }
}

/// Data integrity problem found while aggregating. Reported alongside the
/// result, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataWarning {
    /// Match references a player id missing from the supplied player set;
    /// that side's contribution was excluded.
    MissingPlayer {
        match_id: MatchId,
        player_id: PlayerId,
    },

    /// Draw flag disagrees with score equality; the scores were trusted.
    InconsistentDrawFlag { match_id: MatchId },

    /// Match pairs a player against themselves; skipped entirely.
    SelfPairing {
        match_id: MatchId,
        player_id: PlayerId,
    },
}

impl std::fmt::Display for DataWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataWarning::MissingPlayer {
                match_id,
                player_id,
            } => write!(
                f,
                "match {} references unknown player {}; side excluded",
                match_id, player_id
            ),
            DataWarning::InconsistentDrawFlag { match_id } => write!(
                f,
                "match {} draw flag disagrees with scores; scores used",
                match_id
            ),
            DataWarning::SelfPairing {
                match_id,
                player_id,
            } => write!(
                f,
                "match {} pairs player {} against themselves; skipped",
                match_id, player_id
            ),
        }
    }
}
