//! League points and league standings.
//!
//! Applies a validated [`ScoringSystem`] to a league snapshot: ranks each
//! event, counts attendance and podium finishes, evaluates the scoring
//! formulas per player, and hands the rows to the tie-break resolver.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{
    DataWarning, LeaguePlayerStats, LeagueSnapshot, LeagueStandings, Match, MatchTally, PlayerId,
    PodiumCounts, PointMetric, ScoringError, ScoringSystem,
};

use super::aggregate::aggregate_matches;
use super::event_ranking::rank_event;
use super::percentage::normalize;
use super::tie_break;

fn metric_count(
    metric: PointMetric,
    attended: u32,
    tally: &MatchTally,
    podiums: &PodiumCounts,
) -> u32 {
    match metric {
        PointMetric::EventAttendance => attended,
        PointMetric::MatchWins => tally.matches_won,
        PointMetric::GameWins => tally.games_won,
        PointMetric::FirstPlace => podiums.first,
        PointMetric::SecondPlace => podiums.second,
        PointMetric::ThirdPlace => podiums.third,
    }
}

/// Evaluate a scoring system for one player's league figures.
///
/// Formulas apply in ascending order of their `order` field. Addition
/// commutes, so the order only matters for reading the configuration back,
/// but the evaluation follows it anyway.
pub fn league_points(
    scoring: &ScoringSystem,
    attended: u32,
    tally: &MatchTally,
    podiums: &PodiumCounts,
) -> i64 {
    scoring
        .sorted_formulas()
        .iter()
        .map(|f| f.multiplier * i64::from(metric_count(f.metric, attended, tally, podiums)))
        .sum()
}

/// Rank a league's players from a snapshot under the given scoring system.
///
/// Validates the scoring system first and fails without computing anything
/// when it is invalid. Attendance and podium counts come from ranking each
/// event on its own; match statistics are aggregated once across all
/// events. Warnings repeat between the two passes, so only first
/// occurrences are kept.
pub fn rank_league(
    snapshot: &LeagueSnapshot,
    scoring: &ScoringSystem,
) -> Result<LeagueStandings, ScoringError> {
    scoring.validate()?;

    debug!(
        "Ranking league {}: {} events, {} players",
        snapshot.league.name,
        snapshot.events.len(),
        snapshot.players.len()
    );

    let mut attendance: HashMap<PlayerId, u32> = HashMap::new();
    let mut podiums: HashMap<PlayerId, PodiumCounts> = HashMap::new();
    let mut warnings: Vec<DataWarning> = Vec::new();

    for event_snapshot in &snapshot.events {
        let event_players = snapshot.event_players(event_snapshot);
        let standings = rank_event(
            &event_snapshot.event,
            &event_players,
            &event_snapshot.matches,
        );

        for row in &standings.standings {
            *attendance.entry(row.player_id.clone()).or_insert(0) += 1;
            let counts = podiums.entry(row.player_id.clone()).or_default();
            match row.rank {
                1 => counts.first += 1,
                2 => counts.second += 1,
                3 => counts.third += 1,
                _ => {}
            }
        }
        warnings.extend(standings.warnings);
    }

    let all_matches: Vec<Match> = snapshot
        .events
        .iter()
        .flat_map(|e| e.matches.iter().cloned())
        .collect();
    let aggregation = aggregate_matches(&snapshot.players, &all_matches);
    let stats = normalize(&aggregation.tallies, &all_matches);

    for warning in aggregation.warnings {
        if !warnings.contains(&warning) {
            warnings.push(warning);
        }
    }

    let rows: Vec<LeaguePlayerStats> = snapshot
        .players
        .iter()
        .map(|p| {
            let attended = attendance.get(&p.id).copied().unwrap_or(0);
            let placements = podiums.get(&p.id).copied().unwrap_or_default();
            let tally = aggregation.tallies.get(&p.id).copied().unwrap_or_default();
            LeaguePlayerStats {
                player_id: p.id.clone(),
                player_name: p.name.clone(),
                league_points: league_points(scoring, attended, &tally, &placements),
                events_attended: attended,
                placements,
                stats: stats.get(&p.id).cloned().unwrap_or_default(),
            }
        })
        .collect();

    let standings = tie_break::resolve(rows, &scoring.tie_breakers);

    Ok(LeagueStandings {
        league_id: snapshot.league.id.clone(),
        standings,
        warnings,
    })
}
