//! User Console SDK
//!
//! This crate provides the public contract of the `user_console` module:
//! - `UserDirectoryClient` trait (the collaborator that owns user data)
//! - Model types for user records, filter criteria and statistics
//! - Error type (`UserConsoleError`)
//!
//! ## Usage
//!
//! ```ignore
//! use user_console_sdk::{FilterCriteria, Role, UserDirectoryClient};
//!
//! let users = client.fetch_all_users().await?;
//! let criteria = FilterCriteria {
//!     role: Some(Role::Tutor),
//!     ..FilterCriteria::default()
//! };
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod errors;
pub mod models;

pub use client::UserDirectoryClient;
pub use errors::UserConsoleError;
pub use models::{
    FilterCriteria, Role, RoleProfile, SortDir, SortKey, Statistics, UserPatch, UserRecord,
    UserStatus,
};
