//! Object-safe collaborator boundary for the `user_console` module.
//!
//! The console never owns user data: it asks a `UserDirectoryClient` for the
//! full collection and for server-side statistics, and routes admin actions
//! through it. Implementations are shared as `Arc<dyn UserDirectoryClient>`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::UserConsoleError;
use crate::models::{Statistics, UserPatch, UserRecord};

#[async_trait]
pub trait UserDirectoryClient: Send + Sync {
    /// Fetch every user the caller may see, in directory order.
    ///
    /// # Errors
    /// `Unavailable` when the directory cannot be reached.
    async fn fetch_all_users(&self) -> Result<Vec<UserRecord>, UserConsoleError>;

    /// Fetch statistics as computed by the directory.
    ///
    /// These may disagree with statistics computed locally from
    /// `fetch_all_users`; callers do not reconcile the two.
    ///
    /// # Errors
    /// `Unavailable` when the directory cannot be reached.
    async fn fetch_statistics(&self) -> Result<Statistics, UserConsoleError>;

    /// Block (`enabled = false`) or unblock (`enabled = true`) a user.
    ///
    /// # Errors
    /// `NotFound` for an unknown id.
    async fn set_user_enabled(
        &self,
        id: Uuid,
        enabled: bool,
    ) -> Result<UserRecord, UserConsoleError>;

    /// Apply an administrator edit to a user.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `Validation` if the directory rejects
    /// the patch.
    async fn update_user(&self, id: Uuid, patch: UserPatch)
    -> Result<UserRecord, UserConsoleError>;
}
