//! Points and percentage normalization.
//!
//! Turns raw tallies into comparable figures: match and game points, own
//! win percentages, and opponents' average win percentages. Percentages
//! are points-based (points earned over points available) and floored at
//! [`PERCENTAGE_FLOOR`](super::PERCENTAGE_FLOOR) once a player has played
//! at all.

use std::collections::HashMap;

use crate::models::{Match, MatchTally, PlayerId, PlayerStats};

use super::{DRAW_POINTS, PERCENTAGE_FLOOR, WIN_POINTS};

/// Match points earned: 3 per win, 1 per draw, 0 per loss.
pub fn match_points(tally: &MatchTally) -> u32 {
    WIN_POINTS * tally.matches_won + DRAW_POINTS * tally.matches_drawn
}

/// Game points earned: 3 per win, 1 per draw, 0 per loss.
pub fn game_points(tally: &MatchTally) -> u32 {
    WIN_POINTS * tally.games_won + DRAW_POINTS * tally.games_drawn
}

/// Points earned over points available, floored once anything was played.
/// Zero participation yields 0.0, not the floor.
fn floored_percentage(points: u32, played: u32) -> f64 {
    if played == 0 {
        return 0.0;
    }
    let percentage = points as f64 / (WIN_POINTS * played) as f64;
    if percentage < PERCENTAGE_FLOOR {
        PERCENTAGE_FLOOR
    } else {
        percentage
    }
}

/// Floored match-win percentage for a tally.
pub fn match_win_percentage(tally: &MatchTally) -> f64 {
    floored_percentage(match_points(tally), tally.matches_played())
}

/// Floored game-win percentage for a tally.
pub fn game_win_percentage(tally: &MatchTally) -> f64 {
    floored_percentage(game_points(tally), tally.games_played())
}

/// Compute full [`PlayerStats`] for every tallied player.
///
/// Opponent averages take one sample per played match, so a rematch counts
/// its opponent twice. Samples use the opponent's own floored percentage.
/// Matches against unknown players and self-pairings contribute no samples.
pub fn normalize(
    tallies: &HashMap<PlayerId, MatchTally>,
    matches: &[Match],
) -> HashMap<PlayerId, PlayerStats> {
    // Own percentages first; opponent averages read from these.
    let own: HashMap<&PlayerId, (f64, f64)> = tallies
        .iter()
        .map(|(id, tally)| (id, (match_win_percentage(tally), game_win_percentage(tally))))
        .collect();

    let mut stats = HashMap::new();
    for (id, tally) in tallies {
        let mut match_samples = Vec::new();
        let mut game_samples = Vec::new();

        for m in matches {
            if !m.is_played() || m.player1_id == m.player2_id {
                continue;
            }
            let opponent = match m.opponent_of(id) {
                Some(opponent) => opponent,
                None => continue,
            };
            if let Some(&(match_pct, game_pct)) = own.get(opponent) {
                match_samples.push(match_pct);
                game_samples.push(game_pct);
            }
        }

        stats.insert(
            id.clone(),
            PlayerStats {
                tally: *tally,
                match_points: match_points(tally),
                game_points: game_points(tally),
                match_win_percentage: match_win_percentage(tally),
                game_win_percentage: game_win_percentage(tally),
                opponents_match_win_percentage: average(&match_samples),
                opponents_game_win_percentage: average(&game_samples),
            },
        );
    }

    stats
}

fn average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}
