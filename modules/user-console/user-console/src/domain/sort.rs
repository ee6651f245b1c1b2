//! Ordering for user lists.
//!
//! Kept apart from the filter pass: filtering never reorders, sorting is an
//! explicit extra step.

use std::cmp::Ordering;

use user_console_sdk::{SortDir, SortKey, UserRecord};

/// Stable in-place sort of `users` by `key`.
///
/// Text keys compare case-insensitively. A missing last login sorts before
/// any recorded one in ascending order. `Desc` is the exact reverse of `Asc`.
pub fn sort_users(users: &mut [UserRecord], key: SortKey, dir: SortDir) {
    users.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

fn compare(a: &UserRecord, b: &UserRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::DisplayName => cmp_ci(&a.display_name, &b.display_name),
        SortKey::Email => cmp_ci(&a.email, &b.email),
        SortKey::Role => a.role().as_token().cmp(b.role().as_token()),
        SortKey::Status => a.status.as_token().cmp(b.status.as_token()),
        SortKey::RegisteredAt => a.registered_at.cmp(&b.registered_at),
        SortKey::LastLoginAt => a.last_login_at.cmp(&b.last_login_at),
    }
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
