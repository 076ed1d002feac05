//! # Standings Engine
//!
//! A deterministic ranking and scoring engine for recurring competitive
//! leagues: two-player matches roll up into event standings, events roll
//! up into league standings under a configurable scoring system.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, matches, events, scoring systems)
//! - **calculate**: Aggregation, normalization, ranking, and tie-break resolution
//! - **config**: Scoring system loading and validation

pub mod calculate;
pub mod config;
pub mod models;

pub use calculate::{rank_event, rank_league};
pub use models::*;

/// Format a 0.0 to 1.0 rate as a percentage with one decimal.
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
