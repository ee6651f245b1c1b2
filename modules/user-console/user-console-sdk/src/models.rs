//! Public models for the `user_console` module.
//!
//! These are the data structures exchanged between the console and the
//! collaborator that owns user data. They serialize to the same JSON shape
//! the directory files use.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Platform role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Tutor,
    Admin,
}

impl Role {
    /// Token shown to users and matched by search suggestions.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Tutor => "TUTOR",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    Pending,
}

impl UserStatus {
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Suspended => "SUSPENDED",
            UserStatus::Pending => "PENDING",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Role-specific profile data.
///
/// The variant is the discriminant: a record's role is always read from it,
/// never guessed from which optional fields happen to be filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleProfile {
    Student {
        #[serde(default)]
        field_of_study: Option<String>,
        #[serde(default)]
        level: Option<String>,
    },
    Tutor {
        #[serde(default)]
        specialty: Option<String>,
        #[serde(default)]
        hourly_rate_cents: Option<u32>,
    },
    Admin,
}

impl RoleProfile {
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            RoleProfile::Student { .. } => Role::Student,
            RoleProfile::Tutor { .. } => Role::Tutor,
            RoleProfile::Admin => Role::Admin,
        }
    }

    /// Empty student profile.
    #[must_use]
    pub const fn student() -> Self {
        RoleProfile::Student {
            field_of_study: None,
            level: None,
        }
    }

    /// Empty tutor profile.
    #[must_use]
    pub const fn tutor() -> Self {
        RoleProfile::Tutor {
            specialty: None,
            hourly_rate_cents: None,
        }
    }
}

/// A user as seen by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub profile: RoleProfile,
    pub status: UserStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_login_at: Option<OffsetDateTime>,
    pub enabled: bool,
}

impl UserRecord {
    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }
}

/// Field a user list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    DisplayName,
    Email,
    Role,
    Status,
    RegisteredAt,
    LastLoginAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDir {
    #[default]
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

/// Filter criteria for the user list. Every `None` means "no constraint".
///
/// Date bounds are kept as the raw strings typed into the form; they are
/// parsed when a filter pass runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub last_login_days: Option<u32>,
    pub sort_by: Option<SortKey>,
    pub sort_direction: SortDir,
}

/// Aggregate counts over a user collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_users: usize,
    pub active_users: usize,
    pub blocked_users: usize,
    pub total_students: usize,
    pub total_tutors: usize,
    pub total_admins: usize,
    pub active_users_percentage: f64,
    pub blocked_users_percentage: f64,
    pub students_percentage: f64,
    pub tutors_percentage: f64,
}

/// Partial update an administrator can apply to a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}
