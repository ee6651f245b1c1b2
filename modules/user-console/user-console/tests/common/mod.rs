#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for user-console integration tests

use std::sync::Arc;

use time::macros::datetime;
use user_console::{
    InMemoryUserDirectory, RoleProfile, UserConsoleConfig, UserConsoleService, UserRecord,
    UserStatus,
};
use uuid::Uuid;

pub fn record(
    n: u128,
    name: &str,
    email: &str,
    profile: RoleProfile,
    status: UserStatus,
) -> UserRecord {
    UserRecord {
        id: Uuid::from_u128(n),
        display_name: name.to_owned(),
        email: email.to_owned(),
        phone: None,
        profile,
        status,
        registered_at: datetime!(2024-01-15 09:00 UTC),
        last_login_at: None,
        enabled: status != UserStatus::Suspended,
    }
}

/// John Doe (admin, active), Jane Smith (tutor, active), Bob Johnson
/// (student, inactive).
pub fn three_users() -> Vec<UserRecord> {
    vec![
        record(
            1,
            "John Doe",
            "john.doe@example.com",
            RoleProfile::Admin,
            UserStatus::Active,
        ),
        record(
            2,
            "Jane Smith",
            "jane.smith@example.com",
            RoleProfile::tutor(),
            UserStatus::Active,
        ),
        record(
            3,
            "Bob Johnson",
            "bob@example.com",
            RoleProfile::student(),
            UserStatus::Inactive,
        ),
    ]
}

pub fn names(users: &[UserRecord]) -> Vec<&str> {
    users.iter().map(|u| u.display_name.as_str()).collect()
}

pub async fn loaded_service() -> (Arc<InMemoryUserDirectory>, UserConsoleService) {
    let directory = Arc::new(InMemoryUserDirectory::new(three_users()));
    let service = UserConsoleService::new(directory.clone(), UserConsoleConfig::default());
    service.reload().await;
    (directory, service)
}
