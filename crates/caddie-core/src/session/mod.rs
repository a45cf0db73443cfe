//! Session domain: the authoritative round-flow state machine.
//!
//! `SessionState` is the single root object for a tracking session. It is
//! exclusively owned by whoever drives the transition engine; screens only
//! read it or issue [`command::Command`]s.

pub mod command;
pub mod engine;
pub mod model;
pub mod repository;
pub mod router;

pub use command::Command;
pub use engine::apply;
pub use model::{HOLES_PER_ROUND, Mode, SessionState};
pub use repository::SessionStore;
pub use router::Screen;
