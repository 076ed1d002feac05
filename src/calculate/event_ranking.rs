//! Event standings.
//!
//! Ranks an event's participants by match points with the standard
//! tie-break ladder: own match-win percentage, opponents' match-win
//! percentage, own game-win percentage, opponents' game-win percentage,
//! then player name. Name is the final key, so the order is total and
//! reruns are byte-identical.

use std::cmp::Ordering;

use tracing::debug;

use crate::models::{Event, EventStanding, EventStandings, Match, Player};

use super::aggregate::aggregate_matches;
use super::percentage::normalize;

fn compare_rows(a: &EventStanding, b: &EventStanding) -> Ordering {
    b.stats
        .match_points
        .cmp(&a.stats.match_points)
        .then_with(|| {
            b.stats
                .match_win_percentage
                .total_cmp(&a.stats.match_win_percentage)
        })
        .then_with(|| {
            b.stats
                .opponents_match_win_percentage
                .total_cmp(&a.stats.opponents_match_win_percentage)
        })
        .then_with(|| {
            b.stats
                .game_win_percentage
                .total_cmp(&a.stats.game_win_percentage)
        })
        .then_with(|| {
            b.stats
                .opponents_game_win_percentage
                .total_cmp(&a.stats.opponents_game_win_percentage)
        })
        .then_with(|| a.player_name.cmp(&b.player_name))
}

/// Rank an event's participants from its match records.
///
/// Every supplied player gets a row, including those with no played
/// matches. A rank is shared only when two rows tie on the entire
/// comparator chain including name; otherwise ranks count strictly
/// better rows, so a row ranked 4th has exactly three rows ahead of it.
pub fn rank_event(event: &Event, players: &[Player], matches: &[Match]) -> EventStandings {
    debug!(
        "Ranking event {}: {} players, {} matches",
        event.name,
        players.len(),
        matches.len()
    );

    let aggregation = aggregate_matches(players, matches);
    let stats = normalize(&aggregation.tallies, matches);

    let mut rows: Vec<EventStanding> = players
        .iter()
        .map(|p| EventStanding {
            rank: 0,
            player_id: p.id.clone(),
            player_name: p.name.clone(),
            stats: stats.get(&p.id).cloned().unwrap_or_default(),
        })
        .collect();

    rows.sort_by(compare_rows);

    for i in 0..rows.len() {
        let rank = if i > 0 && compare_rows(&rows[i - 1], &rows[i]) == Ordering::Equal {
            rows[i - 1].rank
        } else {
            (i + 1) as u32
        };
        rows[i].rank = rank;
    }

    EventStandings {
        event_id: event.id.clone(),
        standings: rows,
        warnings: aggregation.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, LeagueId, PlayerId};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq as assert_pretty_eq;

    fn make_event() -> Event {
        Event::new(
            LeagueId::from("test-league"),
            "Test Open".to_string(),
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        )
    }

    fn make_player(name: &str) -> Player {
        Player::new(LeagueId::from("test-league"), name.to_string())
    }

    fn make_match(
        event: &Event,
        round: u32,
        p1: &PlayerId,
        p2: &PlayerId,
        s1: u32,
        s2: u32,
    ) -> Match {
        Match::new(event.id.clone(), round, p1.clone(), p2.clone()).with_result(s1, s2)
    }

    #[test]
    fn test_rank_by_match_points() {
        let event = make_event();
        let alice = make_player("Alice");
        let bob = make_player("Bob");
        let carol = make_player("Carol");
        let players = vec![alice.clone(), bob.clone(), carol.clone()];
        let matches = vec![
            make_match(&event, 1, &alice.id, &bob.id, 2, 0),
            make_match(&event, 2, &alice.id, &carol.id, 2, 0),
            make_match(&event, 3, &bob.id, &alice.id, 2, 0),
        ];

        let standings = rank_event(&event, &players, &matches);

        assert_eq!(standings.standings.len(), 3);
        assert_eq!(standings.standings[0].player_name, "Alice");
        assert_eq!(standings.standings[0].rank, 1);
        assert_eq!(standings.standings[0].stats.match_points, 6);
        assert_eq!(standings.standings[1].player_name, "Bob");
        assert_eq!(standings.standings[2].player_name, "Carol");
        assert!(standings.winner().unwrap().is_winner());
    }

    #[test]
    fn test_tie_broken_by_opponents_match_win_percentage() {
        let event = make_event();
        let alice = make_player("Alice");
        let bob = make_player("Bob");
        let carol = make_player("Carol");
        let dave = make_player("Dave");
        let players = vec![alice.clone(), bob.clone(), carol.clone(), dave.clone()];
        // Alice and Carol both 1-0, but Alice's opponent went on to win a match
        let matches = vec![
            make_match(&event, 1, &alice.id, &bob.id, 2, 0),
            make_match(&event, 1, &carol.id, &dave.id, 2, 0),
            make_match(&event, 2, &bob.id, &dave.id, 2, 0),
        ];

        let standings = rank_event(&event, &players, &matches);

        assert_eq!(standings.standings[0].player_name, "Alice");
        assert_eq!(standings.standings[0].rank, 1);
        assert_eq!(standings.standings[1].player_name, "Carol");
        assert_eq!(standings.standings[1].rank, 2);
    }

    #[test]
    fn test_tie_broken_by_game_win_percentage() {
        let event = make_event();
        let alice = make_player("Alice");
        let bob = make_player("Bob");
        let carol = make_player("Carol");
        let dave = make_player("Dave");
        let players = vec![alice.clone(), bob.clone(), carol.clone(), dave.clone()];
        // Carol swept her match, Alice dropped a game
        let matches = vec![
            make_match(&event, 1, &alice.id, &bob.id, 2, 1),
            make_match(&event, 1, &carol.id, &dave.id, 2, 0),
        ];

        let standings = rank_event(&event, &players, &matches);

        assert_eq!(standings.standings[0].player_name, "Carol");
        assert_eq!(standings.standings[1].player_name, "Alice");
    }

    #[test]
    fn test_full_tie_falls_back_to_name() {
        let event = make_event();
        let alice = make_player("Alice");
        let bob = make_player("Bob");
        let players = vec![bob.clone(), alice.clone()];
        let matches = vec![make_match(&event, 1, &alice.id, &bob.id, 1, 1)];

        let standings = rank_event(&event, &players, &matches);

        // Identical stats after a draw, so names decide and ranks stay distinct
        assert_eq!(standings.standings[0].player_name, "Alice");
        assert_eq!(standings.standings[0].rank, 1);
        assert_eq!(standings.standings[1].player_name, "Bob");
        assert_eq!(standings.standings[1].rank, 2);
    }

    #[test]
    fn test_identical_rows_share_rank() {
        let event = make_event();
        // Same name and zero matches each, built with explicit ids so the
        // registry can hold both
        let alex1 = Player {
            id: EntityId::from("alex-1"),
            league_id: LeagueId::from("test-league"),
            name: "Alex".to_string(),
            created_at: chrono::Utc::now(),
        };
        let alex2 = Player {
            id: EntityId::from("alex-2"),
            league_id: LeagueId::from("test-league"),
            name: "Alex".to_string(),
            created_at: chrono::Utc::now(),
        };
        let bea = make_player("Bea");
        let players = vec![alex1, alex2, bea];

        let standings = rank_event(&event, &players, &[]);

        assert_eq!(standings.standings[0].rank, 1);
        assert_eq!(standings.standings[1].rank, 1);
        assert_eq!(standings.standings[2].rank, 3);
        assert_eq!(standings.standings[2].player_name, "Bea");
    }

    #[test]
    fn test_no_show_ranks_below_floored_loser() {
        let event = make_event();
        let alice = make_player("Alice");
        let bob = make_player("Bob");
        let zara = make_player("Zara");
        let players = vec![zara.clone(), alice.clone(), bob.clone()];
        let matches = vec![make_match(&event, 1, &alice.id, &bob.id, 2, 0)];

        let standings = rank_event(&event, &players, &matches);

        // Bob lost but holds the floor percentage; Zara never played
        assert_eq!(standings.standings[1].player_name, "Bob");
        assert_eq!(standings.standings[2].player_name, "Zara");
        assert_eq!(standings.standings[2].stats.match_win_percentage, 0.0);
    }

    #[test]
    fn test_empty_event() {
        let event = make_event();
        let standings = rank_event(&event, &[], &[]);

        assert!(standings.standings.is_empty());
        assert!(standings.winner().is_none());
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let event = make_event();
        let alice = make_player("Alice");
        let bob = make_player("Bob");
        let carol = make_player("Carol");
        let players = vec![alice.clone(), bob.clone(), carol.clone()];
        let matches = vec![
            make_match(&event, 1, &alice.id, &bob.id, 2, 1),
            make_match(&event, 2, &bob.id, &carol.id, 1, 1),
        ];

        let first = rank_event(&event, &players, &matches);
        let second = rank_event(&event, &players, &matches);

        assert_pretty_eq!(first, second);
    }

    #[test]
    fn test_warnings_surface_in_standings() {
        let event = make_event();
        let alice = make_player("Alice");
        let ghost = make_player("Ghost");
        let players = vec![alice.clone()];
        let matches = vec![make_match(&event, 1, &alice.id, &ghost.id, 2, 0)];

        let standings = rank_event(&event, &players, &matches);

        assert_eq!(standings.warnings.len(), 1);
        assert_eq!(standings.standings[0].stats.tally.matches_won, 1);
    }
}
