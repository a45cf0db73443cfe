//! The transition engine.
//!
//! [`apply`] is the only mutation path for [`SessionState`]: pure, total,
//! and free of I/O. Callers persist the returned state themselves (see
//! the application layer's commit step). Out-of-range indices are
//! uniformly a no-op, so `apply` can never fail or panic; diagnosing a
//! screen that sends bad indices is a caller concern.

use crate::session::command::Command;
use crate::session::model::{HOLES_PER_ROUND, Mode, SessionState};

/// Computes the successor state for `command`.
///
/// The input state is never mutated; every command either fully applies
/// to the returned copy or leaves it identical to the input.
pub fn apply(state: &SessionState, command: Command) -> SessionState {
    let mut next = state.clone();
    match command {
        Command::LoadState(snapshot) => {
            next = snapshot;
        }
        Command::SetBag(clubs) => {
            next.bag = clubs;
        }
        Command::SetMode(mode) => {
            next.mode = mode;
        }
        Command::StartHole { number, par } => {
            next.active_hole_number = number;
            next.active_par = par;
            next.active_strokes.clear();
            next.editing = None;
            next.mode = Mode::LiveHole;
        }
        Command::AddStroke(stroke) => {
            next.active_strokes.push(stroke);
        }
        Command::UpdateStroke { index, stroke } => {
            if let Some(slot) = next.active_strokes.get_mut(index) {
                *slot = stroke;
            }
        }
        Command::DeleteStroke { index } => {
            if index < next.active_strokes.len() {
                next.active_strokes.remove(index);
            }
        }
        Command::FinishNewHole(record) => {
            next.completed_holes.push(record);
            next.active_hole_number = next.active_hole_number.saturating_add(1);
            next.furthest_hole_reached = next.active_hole_number;
            next.active_strokes.clear();
            next.mode = if next.active_hole_number > HOLES_PER_ROUND {
                Mode::Summary
            } else {
                Mode::HoleSetup
            };
        }
        Command::FinishEditedHole { index, record } => {
            if let Some(slot) = next.completed_holes.get_mut(index) {
                *slot = record;
                next.editing = None;
                next.mode = Mode::Summary;
            }
        }
        Command::EditHole { index, record } => {
            if index < next.completed_holes.len() {
                next.editing = Some(index);
                next.active_hole_number = record.hole_number;
                next.active_par = record.par;
                // The record arrives by value, so the scratchpad never
                // aliases the stored hole.
                next.active_strokes = record.strokes;
                next.mode = Mode::LiveHole;
            }
        }
        Command::ResumeRound => {
            next.editing = None;
            next.active_hole_number = next.furthest_hole_reached;
            next.active_strokes.clear();
            next.mode = Mode::HoleSetup;
        }
        Command::ResetRound => {
            next = SessionState {
                bag: std::mem::take(&mut next.bag),
                archive: std::mem::take(&mut next.archive),
                ..SessionState::default()
            };
        }
        Command::ArchiveRound(round) => {
            next.archive.push(round);
        }
        Command::DeleteArchived { index } => {
            if index < next.archive.len() {
                next.archive.remove(index);
            }
        }
        Command::ClearArchive => {
            next.archive.clear();
        }
    }
    next
}
