//! Raw match aggregation.
//!
//! First stage of every ranking run: fold match records into per-player
//! [`MatchTally`] counters. Malformed records are reported as warnings and
//! excluded, never turned into errors.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{DataWarning, Match, MatchTally, Player, PlayerId};

/// Tallies plus the integrity warnings hit while building them.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// One entry per supplied player, zeroed when unmatched
    pub tallies: HashMap<PlayerId, MatchTally>,
    /// Problems found in the match records, in record order
    pub warnings: Vec<DataWarning>,
}

/// Fold match records into per-player tallies.
///
/// Every supplied player gets an entry, all-zero when they played nothing.
/// Unplayed matches are skipped silently. A match referencing an unknown
/// player still credits the known side; the unknown side is reported as a
/// warning. Self-pairings are skipped and reported.
pub fn aggregate_matches(players: &[Player], matches: &[Match]) -> Aggregation {
    let mut tallies: HashMap<PlayerId, MatchTally> = players
        .iter()
        .map(|p| (p.id.clone(), MatchTally::default()))
        .collect();
    let mut warnings = Vec::new();

    for m in matches {
        let (score1, score2) = match m.scores() {
            Some(scores) => scores,
            None => continue,
        };

        if m.player1_id == m.player2_id {
            warn!(
                "Match {} pairs player {} against themselves, skipping",
                m.id, m.player1_id
            );
            warnings.push(DataWarning::SelfPairing {
                match_id: m.id.clone(),
                player_id: m.player1_id.clone(),
            });
            continue;
        }

        // Scores are authoritative; a disagreeing draw flag is reported
        // but does not change the outcome.
        if m.draw != (score1 == score2) {
            warn!("Match {} draw flag disagrees with scores, trusting scores", m.id);
            warnings.push(DataWarning::InconsistentDrawFlag {
                match_id: m.id.clone(),
            });
        }

        for player_id in [&m.player1_id, &m.player2_id] {
            if !tallies.contains_key(player_id) {
                warn!(
                    "Match {} references unknown player {}, excluding that side",
                    m.id, player_id
                );
                warnings.push(DataWarning::MissingPlayer {
                    match_id: m.id.clone(),
                    player_id: player_id.clone(),
                });
            }
        }

        match score1.cmp(&score2) {
            Ordering::Greater => {
                if let Some(tally) = tallies.get_mut(&m.player1_id) {
                    tally.record_win(score1, score2);
                }
                if let Some(tally) = tallies.get_mut(&m.player2_id) {
                    tally.record_loss(score2, score1);
                }
            }
            Ordering::Less => {
                if let Some(tally) = tallies.get_mut(&m.player2_id) {
                    tally.record_win(score2, score1);
                }
                if let Some(tally) = tallies.get_mut(&m.player1_id) {
                    tally.record_loss(score1, score2);
                }
            }
            Ordering::Equal => {
                if let Some(tally) = tallies.get_mut(&m.player1_id) {
                    tally.record_draw(score1, score2);
                }
                if let Some(tally) = tallies.get_mut(&m.player2_id) {
                    tally.record_draw(score2, score1);
                }
            }
        }
    }

    debug!(
        "Aggregated {} matches for {} players ({} warnings)",
        matches.len(),
        tallies.len(),
        warnings.len()
    );

    Aggregation { tallies, warnings }
}
