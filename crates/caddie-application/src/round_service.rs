//! Round service: the single writer of session state.
//!
//! Screens never touch [`SessionState`] directly. They hand commands to
//! this service, which runs the pure transition engine and then commits
//! the replacement state to the store. The commit is fire-and-forget:
//! a failed save is logged and the in-memory state stays authoritative
//! for the rest of the process lifetime.

use std::sync::Arc;

use anyhow::Result;
use caddie_core::round::stats::{ClubUsage, RoundTotals, club_usage};
use caddie_core::session::command::Command;
use caddie_core::session::engine;
use caddie_core::session::model::SessionState;
use caddie_core::session::repository::SessionStore;
use caddie_core::session::router::Screen;
use caddie_infrastructure::TomlSessionStore;
use tokio::sync::Mutex;

use crate::report;

/// Owns the authoritative session state for the process.
///
/// Constructed once at startup and shared by `Arc`; there is exactly
/// one writer (the engine, through [`RoundService::apply`]) and any
/// number of readers.
pub struct RoundService {
    state: Arc<Mutex<SessionState>>,
    store: Arc<dyn SessionStore>,
}

impl RoundService {
    /// Hydrates a service from the given store.
    ///
    /// A missing or unusable snapshot means a fresh session; the store
    /// contract guarantees that case surfaces as `Ok(None)` rather than
    /// an error, so startup only fails on real I/O problems.
    pub async fn load(store: Arc<dyn SessionStore>) -> Result<Self> {
        let state = match store.load().await? {
            Some(snapshot) => {
                tracing::debug!("Restored session snapshot");
                engine::apply(&SessionState::default(), Command::LoadState(snapshot))
            }
            None => SessionState::default(),
        };
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            store,
        })
    }

    /// Opens a service against the platform default snapshot location.
    pub async fn open_default() -> Result<Self> {
        let store = TomlSessionStore::default_location()?;
        Self::load(Arc::new(store)).await
    }

    /// Applies one command and commits the resulting state.
    ///
    /// Returns the new state so the issuing screen can re-render
    /// synchronously without taking the lock again.
    pub async fn apply(&self, command: Command) -> SessionState {
        let next = {
            let mut state = self.state.lock().await;
            let next = engine::apply(&state, command);
            *state = next.clone();
            next
        };
        self.commit();
        next
    }

    /// Applies a sequence of commands, committing after each one.
    pub async fn apply_all(&self, commands: impl IntoIterator<Item = Command>) -> SessionState {
        let mut latest = self.state().await;
        for command in commands {
            latest = self.apply(command).await;
        }
        latest
    }

    /// Awaits a save of the current state. Used at shutdown; routine
    /// commits happen in the background.
    pub async fn sync(&self) -> Result<()> {
        let state = self.state.lock().await.clone();
        self.store.save(&state).await?;
        Ok(())
    }

    /// A copy of the current state.
    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Which screen should currently render.
    pub async fn active_screen(&self) -> Screen {
        Screen::for_mode(self.state.lock().await.mode)
    }

    /// On-demand totals over the round in progress.
    pub async fn round_summary(&self) -> RoundTotals {
        let state = self.state.lock().await;
        RoundTotals::for_holes(&state.completed_holes)
    }

    /// Club usage over the round in progress.
    pub async fn club_usage(&self) -> ClubUsage {
        let state = self.state.lock().await;
        club_usage(&state.completed_holes)
    }

    /// CSV scorecard for the round in progress, one row per stroke.
    pub async fn scorecard_csv(&self) -> Result<String> {
        let state = self.state.lock().await;
        report::render_csv(&state.completed_holes)
    }

    /// Best-effort background save; failure never reaches the state
    /// machine. The task snapshots the state when it runs, so commits
    /// that land late can only write a newer state, never clobber one.
    fn commit(&self) {
        let state = self.state.clone();
        let store = self.store.clone();
        tokio::spawn(async move {
            let snapshot = state.lock().await.clone();
            if let Err(e) = store.save(&snapshot).await {
                tracing::warn!(error = %e, "Failed to persist session state");
            } else {
                tracing::debug!("Session state committed");
            }
        });
    }
}
