//! Commands accepted by the transition engine.

use crate::round::model::{ClubName, FinishedRound, HoleRecord, Stroke};
use crate::session::model::{Mode, SessionState};

/// Every legal state change, as issued by the screens.
///
/// Committing a hole is split into [`Command::FinishNewHole`] and
/// [`Command::FinishEditedHole`] so the engine never has to infer
/// intent from the editing flags at commit time; the same data-entry
/// screen serves both paths and picks the command explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the entire state with a snapshot (startup hydration).
    /// Snapshot validity is the caller's concern.
    LoadState(SessionState),
    /// Replace the carried clubs. Mode is left unchanged.
    SetBag(Vec<ClubName>),
    /// Replace the mode only.
    SetMode(Mode),
    /// Begin a new hole: clears the stroke scratchpad and enters live play.
    StartHole { number: u8, par: u8 },
    /// Append a stroke to the scratchpad. The engine does not enforce
    /// that the session is in live play; that is screen discipline.
    AddStroke(Stroke),
    /// Replace the scratchpad stroke at `index`.
    UpdateStroke { index: usize, stroke: Stroke },
    /// Remove the scratchpad stroke at `index`, shifting later strokes down.
    DeleteStroke { index: usize },
    /// Commit the scratchpad as the next hole of the round.
    FinishNewHole(HoleRecord),
    /// Commit the scratchpad as a correction of `completed_holes[index]`.
    FinishEditedHole { index: usize, record: HoleRecord },
    /// Re-open `completed_holes[index]` in the scratchpad for correction.
    EditHole { index: usize, record: HoleRecord },
    /// Abandon any edit and return to setting up the furthest hole reached.
    ResumeRound,
    /// Start over. Keeps the bag and the archive; everything else
    /// returns to defaults.
    ResetRound,
    /// Append a closed-out round to the archive.
    ArchiveRound(FinishedRound),
    /// Remove the archived round at `index`.
    DeleteArchived { index: usize },
    /// Delete the entire archive.
    ClearArchive,
}
