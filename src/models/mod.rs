//! Core data models for the standings engine.

mod event;
mod ids;
mod league;
mod match_record;
mod player;
mod scoring;
mod snapshot;
mod stats;

pub use event::*;
pub use ids::*;
pub use league::*;
pub use match_record::*;
pub use player::*;
pub use scoring::*;
pub use snapshot::*;
pub use stats::*;
