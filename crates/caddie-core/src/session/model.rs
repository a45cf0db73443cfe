//! Session state model.

use strum_macros::{Display, EnumString};

use crate::round::model::{ClubName, FinishedRound, HoleRecord, Stroke, default_bag};

/// Number of holes in a full round. Finishing the last one is the sole
/// terminal condition; there is no separate "round complete" mode.
pub const HOLES_PER_ROUND: u8 = 18;

/// The four interaction modes a session can be in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Choosing which clubs to carry.
    #[default]
    EquipmentSetup,
    /// Entering the next hole's number and par.
    HoleSetup,
    /// Recording strokes on the hole in progress.
    LiveHole,
    /// Reviewing the round so far (reached both mid-round and at
    /// completion; the two are distinguished only by how many holes
    /// have been completed).
    Summary,
}

/// The single authoritative state object for a tracking session.
///
/// Replaced wholesale by [`crate::session::engine::apply`] on every
/// command, never mutated in place by consumers. Entries in `archive`
/// are immutable; entries in `completed_holes` are replaced wholesale
/// on edit, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub mode: Mode,
    /// Clubs currently carried. Order is the player's preference;
    /// duplicates are not meaningful.
    pub bag: Vec<ClubName>,
    /// Scratchpad: the hole currently being played or re-edited.
    pub active_hole_number: u8,
    pub active_par: u8,
    /// Scratchpad: strokes for the in-progress hole.
    pub active_strokes: Vec<Stroke>,
    /// Completed holes for the round in progress, in play order.
    pub completed_holes: Vec<HoleRecord>,
    /// When set, the scratchpad is a re-edit of
    /// `completed_holes[index]` rather than a new hole.
    pub editing: Option<usize>,
    /// Highest hole number ever started; used to resume correctly
    /// after navigating away mid-round.
    pub furthest_hole_reached: u8,
    /// Closed-out rounds, independent of the round in progress.
    pub archive: Vec<FinishedRound>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            mode: Mode::EquipmentSetup,
            bag: default_bag(),
            active_hole_number: 1,
            active_par: 4,
            active_strokes: Vec::new(),
            completed_holes: Vec::new(),
            editing: None,
            furthest_hole_reached: 1,
            archive: Vec::new(),
        }
    }
}

impl SessionState {
    /// Creates a fresh session with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the scratchpad currently re-edits a completed hole.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Whether every hole of the round has been completed.
    pub fn round_complete(&self) -> bool {
        self.completed_holes.len() >= HOLES_PER_ROUND as usize
    }
}
