use thiserror::Error;
use user_console_sdk::UserConsoleError;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: Uuid },

    #[error("Invalid email format: '{email}'")]
    InvalidEmail { email: String },

    #[error("Display name cannot be empty")]
    EmptyDisplayName,

    #[error("Display name too long: {len} characters (max: {max})")]
    DisplayNameTooLong { len: usize, max: usize },

    #[error("Invalid phone number: '{phone}'")]
    InvalidPhone { phone: String },

    #[error("Nothing to update")]
    EmptyPatch,

    #[error("User directory error: {0}")]
    Directory(#[source] UserConsoleError),
}

impl DomainError {
    #[must_use]
    pub fn user_not_found(id: Uuid) -> Self {
        Self::UserNotFound { id }
    }

    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    #[must_use]
    pub fn display_name_too_long(len: usize, max: usize) -> Self {
        Self::DisplayNameTooLong { len, max }
    }

    pub fn invalid_phone(phone: impl Into<String>) -> Self {
        Self::InvalidPhone {
            phone: phone.into(),
        }
    }
}

impl From<UserConsoleError> for DomainError {
    fn from(e: UserConsoleError) -> Self {
        match e {
            UserConsoleError::NotFound { id } => Self::user_not_found(id),
            other => Self::Directory(other),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for UserConsoleError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::UserNotFound { id } => UserConsoleError::not_found(id),
            DomainError::InvalidEmail { email } => {
                UserConsoleError::validation(format!("Invalid email: {email}"))
            }
            DomainError::EmptyDisplayName => {
                UserConsoleError::validation("Display name cannot be empty")
            }
            DomainError::DisplayNameTooLong { len, max } => UserConsoleError::validation(format!(
                "Display name too long: {len} characters (max: {max})"
            )),
            DomainError::InvalidPhone { phone } => {
                UserConsoleError::validation(format!("Invalid phone number: {phone}"))
            }
            DomainError::EmptyPatch => UserConsoleError::validation("Nothing to update"),
            DomainError::Directory(e) => e,
        }
    }
}
