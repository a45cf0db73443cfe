//! Unified path management for caddie data files.
//!
//! All persisted state lives under a single per-user directory so the
//! storage key for the session snapshot is the same on every platform.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/caddie/            # Linux (platform config dir elsewhere)
//! └── session.toml             # Full session snapshot
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform configuration directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for caddie.
pub struct CaddiePaths;

impl CaddiePaths {
    /// Returns the caddie configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/caddie/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("caddie"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of the session snapshot file.
    ///
    /// This is the single fixed storage key for the whole session state.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_file_is_under_config_dir() {
        // Headless CI may have no resolvable config dir.
        let Ok(file) = CaddiePaths::session_file() else {
            return;
        };
        assert!(file.ends_with("caddie/session.toml"));
        assert!(file.starts_with(CaddiePaths::config_dir().unwrap()));
    }
}
