//! Round domain: strokes, holes, finished rounds, and derived statistics.

pub mod model;
pub mod stats;

pub use model::{ClubName, FinishedRound, HoleRecord, ShotResult, Stroke, default_bag};
pub use stats::{ClubUsage, RoundTotals, club_usage};
