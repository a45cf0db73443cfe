pub mod error;
pub mod round;
pub mod session;

// Re-export common error type
pub use error::{CaddieError, Result};

pub use round::model::{
    ClubName, FinishedRound, HoleRecord, ShotResult, Stroke, default_bag,
};
pub use session::command::Command;
pub use session::engine::apply;
pub use session::model::{HOLES_PER_ROUND, Mode, SessionState};
pub use session::repository::SessionStore;
pub use session::router::Screen;
