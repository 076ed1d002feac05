//! League tie-break resolution.
//!
//! League rows sort on league points first. The configured tie-breaker
//! chain applies in ascending order, and player name ascending always
//! closes the chain, so the final order is total regardless of
//! configuration.

use std::cmp::Ordering;

use crate::models::{LeaguePlayerStats, LeagueStanding, TieBreaker, TieBreakerKind};

/// Compare two rows on a single tie-breaker metric, better row first.
fn compare_on(kind: TieBreakerKind, a: &LeaguePlayerStats, b: &LeaguePlayerStats) -> Ordering {
    match kind {
        TieBreakerKind::LeaguePoints => b.league_points.cmp(&a.league_points),
        TieBreakerKind::MatchPoints => b.stats.match_points.cmp(&a.stats.match_points),
        TieBreakerKind::OpponentsMatchWinPercentage => b
            .stats
            .opponents_match_win_percentage
            .total_cmp(&a.stats.opponents_match_win_percentage),
        TieBreakerKind::GameWinPercentage => b
            .stats
            .game_win_percentage
            .total_cmp(&a.stats.game_win_percentage),
        TieBreakerKind::OpponentsGameWinPercentage => b
            .stats
            .opponents_game_win_percentage
            .total_cmp(&a.stats.opponents_game_win_percentage),
        TieBreakerKind::EventAttendance => b.events_attended.cmp(&a.events_attended),
        TieBreakerKind::MatchWins => b.stats.tally.matches_won.cmp(&a.stats.tally.matches_won),
    }
}

/// Sort league rows and attach ranks.
///
/// A rank is shared only when two rows tie on league points, the whole
/// configured chain, and the name fallback; otherwise each rank counts the
/// rows strictly ahead.
pub fn resolve(
    players: Vec<LeaguePlayerStats>,
    tie_breakers: &[TieBreaker],
) -> Vec<LeagueStanding> {
    let mut chain: Vec<&TieBreaker> = tie_breakers.iter().collect();
    chain.sort_by_key(|t| t.order);

    let compare = |a: &LeaguePlayerStats, b: &LeaguePlayerStats| -> Ordering {
        let mut ordering = b.league_points.cmp(&a.league_points);
        for breaker in &chain {
            if ordering != Ordering::Equal {
                break;
            }
            ordering = compare_on(breaker.kind, a, b);
        }
        ordering.then_with(|| a.player_name.cmp(&b.player_name))
    };

    let mut rows = players;
    rows.sort_by(|a, b| compare(a, b));

    let mut standings: Vec<LeagueStanding> = Vec::with_capacity(rows.len());
    for i in 0..rows.len() {
        let rank = if i > 0 && compare(&rows[i - 1], &rows[i]) == Ordering::Equal {
            standings[i - 1].rank
        } else {
            (i + 1) as u32
        };
        standings.push(LeagueStanding::new(rank, rows[i].clone()));
    }

    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, PlayerStats, PodiumCounts};

    fn make_row(name: &str, league_points: i64) -> LeaguePlayerStats {
        LeaguePlayerStats {
            player_id: EntityId::from(name),
            player_name: name.to_string(),
            league_points,
            events_attended: 0,
            placements: PodiumCounts::default(),
            stats: PlayerStats::default(),
        }
    }

    #[test]
    fn test_league_points_descending() {
        let rows = vec![make_row("Alice", 5), make_row("Bob", 10), make_row("Carol", 7)];

        let standings = resolve(rows, &[]);

        assert_eq!(standings[0].player_name, "Bob");
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].player_name, "Carol");
        assert_eq!(standings[2].player_name, "Alice");
        assert_eq!(standings[2].rank, 3);
    }

    #[test]
    fn test_chain_breaks_points_tie() {
        let mut alice = make_row("Alice", 10);
        alice.stats.tally.matches_won = 3;
        let mut bob = make_row("Bob", 10);
        bob.stats.tally.matches_won = 5;

        let standings = resolve(
            vec![alice, bob],
            &[TieBreaker::new(TieBreakerKind::MatchWins, 1)],
        );

        assert_eq!(standings[0].player_name, "Bob");
        assert_eq!(standings[1].player_name, "Alice");
    }

    #[test]
    fn test_chain_order_decides_which_metric_applies_first() {
        let mut alice = make_row("Alice", 10);
        alice.stats.match_points = 12;
        alice.events_attended = 1;
        let mut bob = make_row("Bob", 10);
        bob.stats.match_points = 6;
        bob.events_attended = 4;

        let match_points_first = resolve(
            vec![alice.clone(), bob.clone()],
            &[
                TieBreaker::new(TieBreakerKind::MatchPoints, 1),
                TieBreaker::new(TieBreakerKind::EventAttendance, 2),
            ],
        );
        assert_eq!(match_points_first[0].player_name, "Alice");

        let attendance_first = resolve(
            vec![alice, bob],
            &[
                TieBreaker::new(TieBreakerKind::EventAttendance, 1),
                TieBreaker::new(TieBreakerKind::MatchPoints, 2),
            ],
        );
        assert_eq!(attendance_first[0].player_name, "Bob");
    }

    #[test]
    fn test_chain_entries_apply_by_order_not_position() {
        let mut alice = make_row("Alice", 10);
        alice.stats.match_points = 12;
        alice.events_attended = 1;
        let mut bob = make_row("Bob", 10);
        bob.stats.match_points = 6;
        bob.events_attended = 4;

        // Listed out of order; attendance carries the lower order value
        let standings = resolve(
            vec![alice, bob],
            &[
                TieBreaker::new(TieBreakerKind::MatchPoints, 2),
                TieBreaker::new(TieBreakerKind::EventAttendance, 1),
            ],
        );

        assert_eq!(standings[0].player_name, "Bob");
    }

    #[test]
    fn test_exhausted_chain_falls_back_to_name() {
        let alice = make_row("Alice", 10);
        let bob = make_row("Bob", 10);

        let standings = resolve(
            vec![bob, alice],
            &[TieBreaker::new(TieBreakerKind::MatchWins, 1)],
        );

        assert_eq!(standings[0].player_name, "Alice");
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].player_name, "Bob");
        assert_eq!(standings[1].rank, 2);
    }

    #[test]
    fn test_full_tie_shares_rank() {
        let twin1 = LeaguePlayerStats {
            player_id: EntityId::from("alex-1"),
            ..make_row("Alex", 10)
        };
        let twin2 = LeaguePlayerStats {
            player_id: EntityId::from("alex-2"),
            ..make_row("Alex", 10)
        };
        let carol = make_row("Carol", 5);

        let standings = resolve(vec![twin1, twin2, carol], &[]);

        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].rank, 1);
        assert_eq!(standings[2].rank, 3);
        assert_eq!(standings[2].player_name, "Carol");
    }

    #[test]
    fn test_every_kind_compares_its_metric() {
        // For each kind, Zed leads on the metric while Art leads
        // alphabetically, so a broken comparator would flip the result
        let cases: Vec<(TieBreakerKind, Box<dyn Fn(&mut LeaguePlayerStats)>)> = vec![
            (
                TieBreakerKind::LeaguePoints,
                Box::new(|row| row.league_points += 1),
            ),
            (
                TieBreakerKind::MatchPoints,
                Box::new(|row| row.stats.match_points += 3),
            ),
            (
                TieBreakerKind::OpponentsMatchWinPercentage,
                Box::new(|row| row.stats.opponents_match_win_percentage += 0.25),
            ),
            (
                TieBreakerKind::GameWinPercentage,
                Box::new(|row| row.stats.game_win_percentage += 0.25),
            ),
            (
                TieBreakerKind::OpponentsGameWinPercentage,
                Box::new(|row| row.stats.opponents_game_win_percentage += 0.25),
            ),
            (
                TieBreakerKind::EventAttendance,
                Box::new(|row| row.events_attended += 2),
            ),
            (
                TieBreakerKind::MatchWins,
                Box::new(|row| row.stats.tally.matches_won += 1),
            ),
        ];

        for (kind, boost) in cases {
            let art = make_row("Art", 10);
            let mut zed = make_row("Zed", 10);
            boost(&mut zed);

            let standings = resolve(vec![art, zed], &[TieBreaker::new(kind, 1)]);
            assert_eq!(standings[0].player_name, "Zed", "kind: {}", kind);
        }
    }
}
