//! Admin actions of the user-management console.
//!
//! Every mutation goes through the directory client and is followed by a
//! wholesale reload of the store; the console never patches its local copy.

use std::sync::Arc;

use user_console_sdk::{Statistics, UserDirectoryClient, UserPatch, UserRecord};
use uuid::Uuid;

use super::error::DomainError;
use super::session::ConsoleSession;
use super::statistics::compute_statistics;
use crate::config::UserConsoleConfig;
use crate::store::UserStore;

#[derive(Clone)]
pub struct UserConsoleService {
    client: Arc<dyn UserDirectoryClient>,
    store: Arc<UserStore>,
    config: UserConsoleConfig,
}

impl UserConsoleService {
    #[must_use]
    pub fn new(client: Arc<dyn UserDirectoryClient>, config: UserConsoleConfig) -> Self {
        Self {
            client,
            store: Arc::new(UserStore::new()),
            config,
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &UserConsoleConfig {
        &self.config
    }

    /// A fresh view session over this service's store.
    #[must_use]
    pub fn session(&self) -> ConsoleSession {
        ConsoleSession::new(Arc::clone(&self.store), self.config.clone())
    }

    /// Statistics over the whole loaded collection.
    #[must_use]
    pub fn local_statistics(&self) -> Statistics {
        compute_statistics(&self.store.users())
    }

    pub async fn reload(&self) {
        self.store.reload(self.client.as_ref()).await;
    }

    /// # Errors
    /// `UserNotFound` for an unknown id, `Directory` if the directory fails.
    pub async fn block_user(&self, id: Uuid) -> Result<UserRecord, DomainError> {
        tracing::info!(%id, "Blocking user");
        self.set_enabled(id, false).await
    }

    /// # Errors
    /// Same as [`Self::block_user`].
    pub async fn unblock_user(&self, id: Uuid) -> Result<UserRecord, DomainError> {
        tracing::info!(%id, "Unblocking user");
        self.set_enabled(id, true).await
    }

    /// Validate `patch`, send it to the directory and reload.
    ///
    /// # Errors
    /// A validation error if the patch is rejected locally (the directory is
    /// not called), otherwise whatever the directory reports.
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<UserRecord, DomainError> {
        tracing::info!(%id, "Updating user");
        let patch = self.validate_patch(patch)?;
        let user = self.client.update_user(id, patch).await?;
        self.reload().await;
        tracing::info!(%id, "Successfully updated user");
        Ok(user)
    }

    async fn set_enabled(&self, id: Uuid, enabled: bool) -> Result<UserRecord, DomainError> {
        let user = self.client.set_user_enabled(id, enabled).await?;
        self.reload().await;
        Ok(user)
    }

    /// Trim and check an admin edit. Returns the normalized patch.
    ///
    /// # Errors
    /// `EmptyPatch`, `EmptyDisplayName`, `DisplayNameTooLong`, `InvalidEmail`
    /// or `InvalidPhone`.
    pub fn validate_patch(&self, patch: UserPatch) -> Result<UserPatch, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::EmptyPatch);
        }

        let display_name = patch
            .display_name
            .map(|name| self.validate_display_name(&name))
            .transpose()?;
        let email = patch.email.map(|e| validate_email(&e)).transpose()?;
        let phone = patch.phone.map(|p| validate_phone(&p)).transpose()?;

        Ok(UserPatch {
            display_name,
            email,
            phone,
        })
    }

    fn validate_display_name(&self, name: &str) -> Result<String, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyDisplayName);
        }
        let len = name.chars().count();
        if len > self.config.max_display_name_length {
            return Err(DomainError::display_name_too_long(
                len,
                self.config.max_display_name_length,
            ));
        }
        Ok(name.to_owned())
    }
}

fn validate_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(email.to_owned())
    } else {
        Err(DomainError::invalid_email(email))
    }
}

/// An empty phone clears the number.
fn validate_phone(phone: &str) -> Result<String, DomainError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(String::new());
    }
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    if allowed && phone.chars().any(|c| c.is_ascii_digit()) {
        Ok(phone.to_owned())
    } else {
        Err(DomainError::invalid_phone(phone))
    }
}
