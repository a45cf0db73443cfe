//! TOML-backed SessionStore implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use caddie_core::error::{CaddieError, Result};
use caddie_core::session::model::SessionState;
use caddie_core::session::repository::SessionStore;

use crate::dto::SessionSnapshot;
use crate::paths::CaddiePaths;
use crate::storage::AtomicTomlFile;

/// Stores the full session state in a single TOML snapshot file.
///
/// Load is tolerant by contract: a missing, empty, malformed, or
/// unsupported snapshot is reported as "no prior state" (with a warning
/// log) so startup never fails because of a bad file. Save writes the
/// whole state atomically on every call.
pub struct TomlSessionStore {
    path: PathBuf,
}

impl TomlSessionStore {
    /// Creates a store backed by the given snapshot file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store at `base_dir/session.toml`. Used by tests and
    /// anything that relocates the data directory.
    pub fn in_dir(base_dir: impl AsRef<Path>) -> Self {
        Self::new(base_dir.as_ref().join("session.toml"))
    }

    /// Creates a store at the platform default location
    /// (e.g. `~/.config/caddie/session.toml`).
    pub fn default_location() -> Result<Self> {
        let path = CaddiePaths::session_file()
            .map_err(|e| CaddieError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    /// The snapshot file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for TomlSessionStore {
    async fn load(&self) -> Result<Option<SessionState>> {
        let path = self.path.clone();
        let loaded = tokio::task::spawn_blocking(move || {
            AtomicTomlFile::<SessionSnapshot>::new(path).load()
        })
        .await
        .map_err(|e| CaddieError::internal(format!("Failed to join load task: {e}")))?;

        let snapshot = match loaded {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return Ok(None),
            Err(e) if e.is_serialization() => {
                tracing::warn!(path = %self.path.display(), error = %e,
                    "Discarding malformed session snapshot");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        match snapshot.into_state() {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e,
                    "Discarding unusable session snapshot");
                Ok(None)
            }
        }
    }

    async fn save(&self, state: &SessionState) -> Result<()> {
        let snapshot = SessionSnapshot::from(state);
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || AtomicTomlFile::new(path).save(&snapshot))
            .await
            .map_err(|e| CaddieError::internal(format!("Failed to join save task: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caddie_core::round::model::Stroke;
    use caddie_core::session::command::Command;
    use caddie_core::session::engine::apply;
    use caddie_core::session::model::Mode;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_without_snapshot_is_none() {
        let dir = TempDir::new().unwrap();
        let store = TomlSessionStore::in_dir(dir.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = TomlSessionStore::in_dir(dir.path());

        let mut state = SessionState::default();
        state = apply(&state, Command::StartHole { number: 1, par: 5 });
        state = apply(&state, Command::AddStroke(Stroke::new("Driver")));

        store.save(&state).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.mode, Mode::LiveHole);
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_no_prior_state() {
        let dir = TempDir::new().unwrap();
        let store = TomlSessionStore::in_dir(dir.path());
        std::fs::write(store.path(), "this is { not toml").unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unsupported_schema_is_no_prior_state() {
        let dir = TempDir::new().unwrap();
        let store = TomlSessionStore::in_dir(dir.path());
        std::fs::write(
            store.path(),
            "schema_version = 99\nmode = \"SUMMARY\"\nactive_hole_number = 1\nactive_par = 4\nfurthest_hole_reached = 1\n",
        )
        .unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_fixed_key() {
        let dir = TempDir::new().unwrap();
        let store = TomlSessionStore::in_dir(dir.path());

        let first = SessionState::default();
        let second = apply(&first, Command::SetMode(Mode::Summary));
        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.mode, Mode::Summary);
        // One file, one key.
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "toml"))
            .collect();
        assert_eq!(entries.len(), 1);
    }
}
