//! Persistence DTOs.
//!
//! Domain state is never written to disk directly; it passes through a
//! versioned snapshot DTO so on-disk tolerance rules (unknown mode
//! strings, missing collections) stay out of the domain layer.

pub mod session;

pub use session::{SCHEMA_VERSION, SessionSnapshot};
