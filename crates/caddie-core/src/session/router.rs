//! View routing.
//!
//! A pure read of [`Mode`]: which external screen collaborator should be
//! active. Screens render state and issue commands; routing itself holds
//! no logic and no state.
//!
//! The "unknown mode falls back to equipment selection" rule lives at
//! the persistence boundary, where modes exist as strings (see the
//! infrastructure snapshot DTO). Inside the process `Mode` is closed,
//! so the match here is total.

use crate::session::model::Mode;

/// The four external screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    EquipmentSelection,
    HoleSetup,
    LivePlay,
    Summary,
}

impl Screen {
    /// Which screen should render for `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::EquipmentSetup => Screen::EquipmentSelection,
            Mode::HoleSetup => Screen::HoleSetup,
            Mode::LiveHole => Screen::LivePlay,
            Mode::Summary => Screen::Summary,
        }
    }
}

impl From<Mode> for Screen {
    fn from(mode: Mode) -> Self {
        Screen::for_mode(mode)
    }
}
