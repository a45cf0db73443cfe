//! Round domain models.
//!
//! Contains the entities that make up a tracked round: individual strokes,
//! completed holes, and archived finished rounds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::round::stats::RoundTotals;

/// Clubs are identified by their display name so players can carry
/// custom club sets beyond the stock bag.
pub type ClubName = String;

/// The stock bag a new session starts with.
pub const DEFAULT_BAG: [&str; 8] = [
    "Driver", "Hybrid", "7 Iron", "8 Iron", "9 Iron", "PW", "SW", "Putter",
];

/// Returns the stock bag as an owned club list.
pub fn default_bag() -> Vec<ClubName> {
    DEFAULT_BAG.iter().map(|club| club.to_string()).collect()
}

/// Where a shot ended up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum ShotResult {
    Fairway,
    Green,
    Rough,
    Sand,
    Water,
    OutOfBounds,
    Holed,
}

/// One recorded shot within a hole.
///
/// Strokes are immutable once appended to a hole; corrections go through
/// explicit update/delete-by-position commands on the active scratchpad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    /// Club used for the shot.
    pub club: ClubName,
    /// Carry distance in yards, if the player recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u16>,
    /// Outcome tag, if the player recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ShotResult>,
}

impl Stroke {
    /// Creates a stroke with only the club set.
    pub fn new(club: impl Into<ClubName>) -> Self {
        Self {
            club: club.into(),
            distance: None,
            result: None,
        }
    }
}

/// A completed hole: the committed form of the active-hole scratchpad.
///
/// `score` is derivable from `strokes.len()` but is stored independently;
/// the screen finalizing the hole is responsible for keeping them
/// consistent. The transition engine never recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleRecord {
    /// Hole number, 1-18.
    pub hole_number: u8,
    pub par: u8,
    /// Total stroke count for the hole.
    pub score: u8,
    pub putts: u8,
    /// Green in regulation.
    pub gir: bool,
    /// Ordered shots that produced this hole.
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

impl HoleRecord {
    /// Score relative to par (negative is under par).
    pub fn relative_to_par(&self) -> i16 {
        self.score as i16 - self.par as i16
    }
}

/// An archival snapshot of a closed-out round.
///
/// Immutable once created; the archive only supports wholesale deletion
/// or removal by position. The denormalized totals are computed exactly
/// once at close time by [`FinishedRound::close`] and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedRound {
    pub id: Uuid,
    pub course_name: String,
    pub player_name: String,
    pub date: NaiveDate,
    pub total_score: u32,
    pub total_par: u32,
    pub total_putts: u32,
    #[serde(default)]
    pub holes: Vec<HoleRecord>,
}

impl FinishedRound {
    /// Closes out a round, taking ownership of its holes and fixing the
    /// aggregate totals at this moment.
    pub fn close(
        course_name: impl Into<String>,
        player_name: impl Into<String>,
        date: NaiveDate,
        holes: Vec<HoleRecord>,
    ) -> Self {
        let totals = RoundTotals::for_holes(&holes);
        Self {
            id: Uuid::new_v4(),
            course_name: course_name.into(),
            player_name: player_name.into(),
            date,
            total_score: totals.score,
            total_par: totals.par,
            total_putts: totals.putts,
            holes,
        }
    }

    /// Total score relative to total par.
    pub fn relative_to_par(&self) -> i32 {
        self.total_score as i32 - self.total_par as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(number: u8, par: u8, score: u8, putts: u8) -> HoleRecord {
        HoleRecord {
            hole_number: number,
            par,
            score,
            putts,
            gir: false,
            strokes: vec![Stroke::new("Driver"), Stroke::new("Putter")],
        }
    }

    #[test]
    fn test_default_bag_has_stock_clubs() {
        let bag = default_bag();
        assert_eq!(bag.len(), 8);
        assert_eq!(bag[0], "Driver");
        assert_eq!(bag[7], "Putter");
    }

    #[test]
    fn test_hole_relative_to_par() {
        assert_eq!(hole(1, 4, 6, 2).relative_to_par(), 2);
        assert_eq!(hole(2, 5, 4, 1).relative_to_par(), -1);
        assert_eq!(hole(3, 3, 3, 2).relative_to_par(), 0);
    }

    #[test]
    fn test_close_fixes_totals_once() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let mut round = FinishedRound::close(
            "Pebble Creek",
            "Sam",
            date,
            vec![hole(1, 4, 5, 2), hole(2, 3, 3, 1)],
        );
        assert_eq!(round.total_score, 8);
        assert_eq!(round.total_par, 7);
        assert_eq!(round.total_putts, 3);
        assert_eq!(round.relative_to_par(), 1);

        // Totals are a close-time snapshot, not a live view.
        round.holes.clear();
        assert_eq!(round.total_score, 8);
    }

    #[test]
    fn test_shot_result_round_trips_as_string() {
        use std::str::FromStr;
        assert_eq!(ShotResult::Fairway.to_string(), "Fairway");
        assert_eq!(
            ShotResult::from_str("OutOfBounds").unwrap(),
            ShotResult::OutOfBounds
        );
        assert!(ShotResult::from_str("Gallery").is_err());
    }
}
