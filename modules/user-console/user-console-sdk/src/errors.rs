//! Public error types for the `user_console` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;
use uuid::Uuid;

/// Errors returned by the `UserDirectoryClient` and the console service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserConsoleError {
    /// User with the specified ID was not found.
    #[error("User not found: {id}")]
    NotFound { id: Uuid },

    /// Validation error with the provided data.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The user directory could not be reached or refused the request.
    #[error("User directory unavailable: {message}")]
    Unavailable { message: String },
}

impl UserConsoleError {
    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Create a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an Unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
