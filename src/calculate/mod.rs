//! Standings calculation engine.
//!
//! Computes rankings from match records:
//! - Raw per-player tallies (aggregate)
//! - Points and floored win percentages (percentage)
//! - Event standings with the standard tie-break ladder (event_ranking)
//! - League points from configurable formulas (league_scoring)
//! - Configurable league tie-breaks (tie_break)
//!
//! Everything here is pure and deterministic: the same input always
//! produces byte-identical standings.

pub mod aggregate;
pub mod event_ranking;
pub mod league_scoring;
pub mod percentage;
pub mod tie_break;

pub use aggregate::{aggregate_matches, Aggregation};
pub use event_ranking::rank_event;
pub use league_scoring::{league_points, rank_league};
pub use percentage::{game_win_percentage, match_points, match_win_percentage, normalize};

/// Points for a won match or game.
pub const WIN_POINTS: u32 = 3;

/// Points for a drawn match or game.
pub const DRAW_POINTS: u32 = 1;

/// Lower bound for win percentages once a player has played at all.
/// Zero participation stays at 0.0 instead.
pub const PERCENTAGE_FLOOR: f64 = 1.0 / 3.0;
