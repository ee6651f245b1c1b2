use user_console_sdk::{Role, Statistics, UserRecord, UserStatus};

/// Aggregate counts over the full (unfiltered) collection.
#[must_use]
pub fn compute_statistics(users: &[UserRecord]) -> Statistics {
    let mut stats = Statistics {
        total_users: users.len(),
        ..Statistics::default()
    };

    for user in users {
        match user.status {
            UserStatus::Active => stats.active_users += 1,
            UserStatus::Suspended => stats.blocked_users += 1,
            UserStatus::Inactive | UserStatus::Pending => {}
        }
        match user.role() {
            Role::Student => stats.total_students += 1,
            Role::Tutor => stats.total_tutors += 1,
            Role::Admin => stats.total_admins += 1,
        }
    }

    let total = stats.total_users;
    stats.active_users_percentage = percentage(stats.active_users, total);
    stats.blocked_users_percentage = percentage(stats.blocked_users, total);
    stats.students_percentage = percentage(stats.total_students, total);
    stats.tutors_percentage = percentage(stats.total_tutors, total);
    stats
}

/// `count * 100 / total`, or `0` for an empty collection.
///
/// Counts are exact in `f64` up to 2^53 records.
#[allow(clippy::cast_precision_loss)]
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}
