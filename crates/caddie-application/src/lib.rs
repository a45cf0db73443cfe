//! Application layer for caddie.
//!
//! Coordinates the domain's transition engine with the persistence
//! gateway: every screen command goes through [`RoundService`], which
//! applies it and commits the resulting state.

pub mod report;
pub mod round_service;

pub use round_service::RoundService;
