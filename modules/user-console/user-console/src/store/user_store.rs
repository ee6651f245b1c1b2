use std::sync::Arc;

use user_console_sdk::{Statistics, UserDirectoryClient, UserRecord};

use super::observable::Observable;

/// Shared state of the user-management views.
///
/// The user collection is only ever replaced wholesale; whichever reload
/// stores last wins.
#[derive(Default)]
pub struct UserStore {
    users: Observable<Vec<UserRecord>>,
    loading: Observable<bool>,
    statistics: Observable<Option<Statistics>>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn users(&self) -> Arc<Vec<UserRecord>> {
        self.users.get()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.loading.get()
    }

    /// Statistics as reported by the directory, if fetched successfully.
    #[must_use]
    pub fn server_statistics(&self) -> Option<Statistics> {
        (*self.statistics.get()).clone()
    }

    #[must_use]
    pub fn users_observable(&self) -> &Observable<Vec<UserRecord>> {
        &self.users
    }

    #[must_use]
    pub fn loading_observable(&self) -> &Observable<bool> {
        &self.loading
    }

    pub fn replace_users(&self, users: Vec<UserRecord>) {
        tracing::debug!(count = users.len(), "Replacing user collection");
        self.users.replace(users);
    }

    /// Refresh users and statistics from `client`.
    ///
    /// A failed user fetch leaves the previous collection in place; a failed
    /// statistics fetch leaves the previous statistics in place. The two
    /// fetches are independent.
    pub async fn reload(&self, client: &dyn UserDirectoryClient) {
        self.loading.replace(true);

        match client.fetch_all_users().await {
            Ok(users) => {
                tracing::info!(count = users.len(), "Loaded users");
                self.replace_users(users);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load users; keeping current list");
            }
        }

        match client.fetch_statistics().await {
            Ok(stats) => self.statistics.replace(Some(stats)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load user statistics");
            }
        }

        self.loading.replace(false);
    }
}
