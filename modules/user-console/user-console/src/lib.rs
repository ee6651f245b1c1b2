//! User Console Module
//!
//! Client-side core of a user-management console. Given a user collection
//! fetched from a [`UserDirectoryClient`] it provides:
//! - a single-pass filter engine (free text, role, status, registration
//!   window, last-login recency) with stable ordering
//! - typeahead suggestions with keyboard/pointer navigation
//! - aggregate statistics, sorting and pagination
//! - a debounce queue for search input and an observable store that
//!   re-renders views on wholesale collection replacement
//! - admin actions (block, unblock, edit) routed through the directory
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use user_console::{InMemoryUserDirectory, UserConsoleConfig, UserConsoleService};
//!
//! let directory = Arc::new(InMemoryUserDirectory::from_json_file("users.json")?);
//! let service = UserConsoleService::new(directory, UserConsoleConfig::default());
//! service.reload().await;
//!
//! let mut session = service.session();
//! session.on_query_settled("jo");
//! let view = session.view();
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use user_console_sdk::{
    FilterCriteria, Role, RoleProfile, SortDir, SortKey, Statistics, UserConsoleError,
    UserDirectoryClient, UserPatch, UserRecord, UserStatus,
};

pub mod config;
pub mod debounce;
pub mod domain;
pub mod infra;
pub mod store;

#[cfg(test)]
mod test_support;

pub use config::UserConsoleConfig;
pub use debounce::{Debouncer, spawn_debounced};
pub use domain::{
    ConsoleSession, ConsoleView, DomainError, FilteredResult, NavKey, NavState, Page, PageInfo,
    SuggestionNavigator, SuggestionSet, UserConsoleService, apply_filters, apply_filters_at,
    compute_statistics, paginate, sort_users, update_suggestions, update_suggestions_with,
};
pub use infra::InMemoryUserDirectory;
pub use store::{Observable, UserStore};
