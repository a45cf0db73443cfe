//! Versioned session snapshot DTO.

use std::str::FromStr;

use caddie_core::error::{CaddieError, Result};
use caddie_core::round::model::{ClubName, FinishedRound, HoleRecord, Stroke};
use caddie_core::session::model::{Mode, SessionState};
use serde::{Deserialize, Serialize};

/// Current snapshot schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// The full session state as persisted to `session.toml`.
///
/// Field names mirror [`SessionState`]; `mode` is stored as its
/// SCREAMING_SNAKE_CASE name so the file stays readable and tolerant:
/// an unrecognized mode string loads as equipment setup rather than
/// failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub schema_version: u32,
    pub mode: String,
    #[serde(default)]
    pub bag: Vec<ClubName>,
    pub active_hole_number: u8,
    pub active_par: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing_index: Option<usize>,
    pub furthest_hole_reached: u8,
    #[serde(default)]
    pub active_strokes: Vec<Stroke>,
    #[serde(default)]
    pub completed_holes: Vec<HoleRecord>,
    #[serde(default)]
    pub archive: Vec<FinishedRound>,
}

impl From<&SessionState> for SessionSnapshot {
    fn from(state: &SessionState) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            mode: state.mode.to_string(),
            bag: state.bag.clone(),
            active_hole_number: state.active_hole_number,
            active_par: state.active_par,
            editing_index: state.editing,
            furthest_hole_reached: state.furthest_hole_reached,
            active_strokes: state.active_strokes.clone(),
            completed_holes: state.completed_holes.clone(),
            archive: state.archive.clone(),
        }
    }
}

impl SessionSnapshot {
    /// Converts the snapshot into domain state.
    ///
    /// # Errors
    ///
    /// Rejects snapshots whose `schema_version` this build does not
    /// understand; the store treats that as "no prior state".
    pub fn into_state(self) -> Result<SessionState> {
        if self.schema_version == 0 || self.schema_version > SCHEMA_VERSION {
            return Err(CaddieError::config(format!(
                "Unsupported session snapshot schema_version {}",
                self.schema_version
            )));
        }

        // A stale editing index pointing past the completed holes is
        // dropped rather than trusted.
        let editing = self
            .editing_index
            .filter(|index| *index < self.completed_holes.len());

        Ok(SessionState {
            mode: Mode::from_str(&self.mode).unwrap_or_default(),
            bag: self.bag,
            active_hole_number: self.active_hole_number,
            active_par: self.active_par,
            active_strokes: self.active_strokes,
            completed_holes: self.completed_holes,
            editing,
            furthest_hole_reached: self.furthest_hole_reached,
            archive: self.archive,
        })
    }
}
