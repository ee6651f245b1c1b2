use time::OffsetDateTime;
use time::macros::datetime;
use user_console_sdk::{RoleProfile, UserRecord, UserStatus};
use uuid::Uuid;

pub const REGISTERED: OffsetDateTime = datetime!(2024-01-15 09:00 UTC);

#[must_use]
pub fn user(
    n: u128,
    display_name: &str,
    email: &str,
    profile: RoleProfile,
    status: UserStatus,
) -> UserRecord {
    UserRecord {
        id: Uuid::from_u128(n),
        display_name: display_name.to_owned(),
        email: email.to_owned(),
        phone: None,
        profile,
        status,
        registered_at: REGISTERED,
        last_login_at: None,
        enabled: status != UserStatus::Suspended,
    }
}

/// Admin "John Doe" (active), tutor "Jane Smith" (active), student
/// "Bob Johnson" (inactive), in that order.
#[must_use]
pub fn sample_users() -> Vec<UserRecord> {
    vec![
        user(
            1,
            "John Doe",
            "john.doe@example.com",
            RoleProfile::Admin,
            UserStatus::Active,
        ),
        user(
            2,
            "Jane Smith",
            "jane.smith@example.com",
            RoleProfile::tutor(),
            UserStatus::Active,
        ),
        user(
            3,
            "Bob Johnson",
            "bob@example.com",
            RoleProfile::student(),
            UserStatus::Inactive,
        ),
    ]
}

#[must_use]
pub fn names(users: &[UserRecord]) -> Vec<&str> {
    users.iter().map(|u| u.display_name.as_str()).collect()
}
