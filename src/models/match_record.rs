//! Match model: a round pairing between two players with game scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, EventId, MatchId, PlayerId};

/// A single match between two players at an event.
///
/// Scores count games won per side. A match without scores has not been
/// played yet and contributes nothing to standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier (derived from event + round + players)
    pub id: MatchId,

    /// Event this match belongs to
    pub event_id: EventId,

    /// Round number
    pub round: u32,

    /// First player
    pub player1_id: PlayerId,

    /// Second player
    pub player2_id: PlayerId,

    /// Games won by player 1
    pub player1_score: Option<u32>,

    /// Games won by player 2
    pub player2_score: Option<u32>,

    /// Whether the match ended in a draw; kept in sync with score equality
    pub draw: bool,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Create a new unplayed Match with auto-generated ID.
    pub fn new(event_id: EventId, round: u32, player1_id: PlayerId, player2_id: PlayerId) -> Self {
        let id = EntityId::generate(&[
            event_id.as_str(),
            &round.to_string(),
            player1_id.as_str(),
            player2_id.as_str(),
        ]);

        Self {
            id,
            event_id,
            round,
            player1_id,
            player2_id,
            player1_score: None,
            player2_score: None,
            draw: false,
            created_at: Utc::now(),
        }
    }

    /// Builder method to record the result. Derives the draw flag from
    /// score equality.
    pub fn with_result(mut self, player1_score: u32, player2_score: u32) -> Self {
        self.player1_score = Some(player1_score);
        self.player2_score = Some(player2_score);
        self.draw = player1_score == player2_score;
        self
    }

    /// Whether both scores have been recorded.
    pub fn is_played(&self) -> bool {
        self.player1_score.is_some() && self.player2_score.is_some()
    }

    /// Both scores, if the match has been played.
    pub fn scores(&self) -> Option<(u32, u32)> {
        match (self.player1_score, self.player2_score) {
            (Some(s1), Some(s2)) => Some((s1, s2)),
            _ => None,
        }
    }

    /// The other side of this match, if the given player is in it.
    pub fn opponent_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        if self.player1_id == *player {
            Some(&self.player2_id)
        } else if self.player2_id == *player {
            Some(&self.player1_id)
        } else {
            None
        }
    }

    /// Winner by score comparison; None for draws and unplayed matches.
    pub fn winner(&self) -> Option<&PlayerId> {
        let (s1, s2) = self.scores()?;
        match s1.cmp(&s2) {
            std::cmp::Ordering::Greater => Some(&self.player1_id),
            std::cmp::Ordering::Less => Some(&self.player2_id),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_match() -> Match {
        Match::new(
            EntityId::from("event-1"),
            1,
            EntityId::from("alice"),
            EntityId::from("bob"),
        )
    }

    #[test]
    fn test_match_creation() {
        let m = make_match();

        assert_eq!(m.round, 1);
        assert!(!m.is_played());
        assert!(!m.draw);
        assert!(m.scores().is_none());
        assert!(!m.id.as_str().is_empty());
    }

    #[test]
    fn test_match_with_result() {
        let m = make_match().with_result(2, 1);

        assert!(m.is_played());
        assert!(!m.draw);
        assert_eq!(m.scores(), Some((2, 1)));
        assert_eq!(m.winner(), Some(&EntityId::from("alice")));
    }

    #[test]
    fn test_match_draw_derived_from_scores() {
        let m = make_match().with_result(1, 1);

        assert!(m.draw);
        assert!(m.winner().is_none());
    }

    #[test]
    fn test_match_unplayed_has_no_winner() {
        assert!(make_match().winner().is_none());
    }

    #[test]
    fn test_match_opponent_of() {
        let m = make_match();

        assert_eq!(
            m.opponent_of(&EntityId::from("alice")),
            Some(&EntityId::from("bob"))
        );
        assert_eq!(
            m.opponent_of(&EntityId::from("bob")),
            Some(&EntityId::from("alice"))
        );
        assert!(m.opponent_of(&EntityId::from("carol")).is_none());
    }

    #[test]
    fn test_match_id_deterministic() {
        let m1 = make_match();
        let m2 = make_match();
        assert_eq!(m1.id, m2.id);
    }

    #[test]
    fn test_match_id_differs_by_round() {
        let m1 = Match::new(
            EntityId::from("event-1"),
            1,
            EntityId::from("alice"),
            EntityId::from("bob"),
        );
        let m2 = Match::new(
            EntityId::from("event-1"),
            2,
            EntityId::from("alice"),
            EntityId::from("bob"),
        );
        assert_ne!(m1.id, m2.id);
    }

    #[test]
    fn test_match_serialization() {
        let m = make_match().with_result(2, 0);

        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Match = serde_json::from_str(&json).unwrap();

        assert_eq!(m.id, deserialized.id);
        assert_eq!(deserialized.scores(), Some((2, 0)));
        assert!(!deserialized.draw);
    }
}
