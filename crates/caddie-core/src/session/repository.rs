//! Session store trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::model::SessionState;

/// Persistence gateway for the session snapshot.
///
/// One fixed storage slot holds the full [`SessionState`]. The contract
/// is deliberately minimal: implementations must treat a missing or
/// unreadable snapshot as `Ok(None)` so startup never fails because of
/// a bad file, and `save` is best-effort with no retry.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the persisted snapshot, if a usable one exists.
    async fn load(&self) -> Result<Option<SessionState>>;

    /// Durably stores the full session state.
    async fn save(&self, state: &SessionState) -> Result<()>;
}
