use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use parking_lot::RwLock;
use user_console_sdk::{
    Statistics, UserConsoleError, UserDirectoryClient, UserPatch, UserRecord, UserStatus,
};
use uuid::Uuid;

use crate::domain::statistics::compute_statistics;

/// User directory held in process memory.
///
/// Backs the CLI (loaded from a JSON array of user records) and tests.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserDirectory {
    #[must_use]
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Parse a JSON array of user records.
    ///
    /// # Errors
    /// Returns an error if `json` is not an array of valid user records.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let users: Vec<UserRecord> =
            serde_json::from_str(json).context("Failed to parse user records")?;
        Ok(Self::new(users))
    }

    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read users file {}", path.display()))?;
        let directory = Self::from_json_str(&raw)
            .with_context(|| format!("Invalid users file {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            count = directory.users.read().len(),
            "Loaded user directory"
        );
        Ok(directory)
    }

    /// Write the current records back as pretty JSON.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&*self.users.read())
            .context("Failed to serialize user records")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write users file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Saved user directory");
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<UserRecord> {
        self.users.read().clone()
    }

    fn modify<F>(&self, id: Uuid, f: F) -> Result<UserRecord, UserConsoleError>
    where
        F: FnOnce(&mut UserRecord),
    {
        let mut users = self.users.write();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| UserConsoleError::not_found(id))?;
        f(user);
        Ok(user.clone())
    }
}

#[async_trait]
impl UserDirectoryClient for InMemoryUserDirectory {
    async fn fetch_all_users(&self) -> Result<Vec<UserRecord>, UserConsoleError> {
        Ok(self.snapshot())
    }

    async fn fetch_statistics(&self) -> Result<Statistics, UserConsoleError> {
        Ok(compute_statistics(&self.users.read()))
    }

    async fn set_user_enabled(
        &self,
        id: Uuid,
        enabled: bool,
    ) -> Result<UserRecord, UserConsoleError> {
        self.modify(id, |user| {
            user.enabled = enabled;
            user.status = if enabled {
                UserStatus::Active
            } else {
                UserStatus::Suspended
            };
        })
    }

    async fn update_user(
        &self,
        id: Uuid,
        patch: UserPatch,
    ) -> Result<UserRecord, UserConsoleError> {
        self.modify(id, |user| {
            if let Some(name) = patch.display_name {
                user.display_name = name;
            }
            if let Some(email) = patch.email {
                user.email = email;
            }
            if let Some(phone) = patch.phone {
                user.phone = (!phone.is_empty()).then_some(phone);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_users;
    use user_console_sdk::Role;

    const USERS_JSON: &str = r#"[
        {
            "id": "00000000-0000-0000-0000-000000000007",
            "display_name": "Ada Tutor",
            "email": "ada@example.com",
            "role": "TUTOR",
            "specialty": "Mathematics",
            "hourly_rate_cents": 4500,
            "status": "ACTIVE",
            "registered_at": "2024-03-01T10:00:00Z",
            "last_login_at": "2024-06-01T08:30:00Z",
            "enabled": true
        },
        {
            "id": "00000000-0000-0000-0000-000000000008",
            "display_name": "Sam Student",
            "email": "sam@example.com",
            "role": "STUDENT",
            "status": "PENDING",
            "registered_at": "2024-04-01T10:00:00+02:00",
            "enabled": true
        }
    ]"#;

    #[test]
    fn parses_tagged_profiles() {
        let dir = InMemoryUserDirectory::from_json_str(USERS_JSON).unwrap();
        let users = dir.snapshot();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].role(), Role::Tutor);
        assert_eq!(users[1].role(), Role::Student);
        assert!(users[1].last_login_at.is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = InMemoryUserDirectory::from_json_str("[{\"id\": 1}]").unwrap_err();
        assert!(err.to_string().contains("Failed to parse user records"));
    }

    #[test]
    fn file_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("users.json");
        std::fs::write(&path, USERS_JSON).unwrap();

        let dir = InMemoryUserDirectory::from_json_file(&path).unwrap();
        dir.save_json_file(&path).unwrap();
        let reloaded = InMemoryUserDirectory::from_json_file(&path).unwrap();
        assert_eq!(reloaded.snapshot(), dir.snapshot());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = InMemoryUserDirectory::from_json_file("/nonexistent/users.json").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/users.json"));
    }

    #[tokio::test]
    async fn block_then_unblock() {
        let dir = InMemoryUserDirectory::new(sample_users());
        let id = Uuid::from_u128(1);

        let blocked = dir.set_user_enabled(id, false).await.unwrap();
        assert!(!blocked.enabled);
        assert_eq!(blocked.status, UserStatus::Suspended);
        assert_eq!(dir.fetch_statistics().await.unwrap().blocked_users, 1);

        let unblocked = dir.set_user_enabled(id, true).await.unwrap();
        assert!(unblocked.enabled);
        assert_eq!(unblocked.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn empty_phone_clears_it() {
        let dir = InMemoryUserDirectory::new(sample_users());
        let id = Uuid::from_u128(2);
        dir.update_user(
            id,
            UserPatch {
                phone: Some("+1 555".to_owned()),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();
        let cleared = dir
            .update_user(
                id,
                UserPatch {
                    phone: Some(String::new()),
                    ..UserPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.phone, None);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let dir = InMemoryUserDirectory::new(sample_users());
        let id = Uuid::from_u128(42);
        assert_eq!(
            dir.set_user_enabled(id, false).await.unwrap_err(),
            UserConsoleError::not_found(id)
        );
    }
}
