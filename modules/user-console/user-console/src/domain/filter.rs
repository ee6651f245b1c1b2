//! Client-side filtering of an already-fetched user collection.
//!
//! A filter pass is a single stable scan: every active predicate is ANDed and
//! the surviving records keep their original relative order. Criteria fields
//! that are absent, empty or unparseable do not constrain the result.

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::macros::{format_description, time};
use time::{Date, Duration, OffsetDateTime};
use user_console_sdk::{FilterCriteria, Role, UserRecord, UserStatus};

/// Output of a filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilteredResult {
    pub users: Vec<UserRecord>,
    pub total_count: usize,
}

/// Filter `users` with the current wall clock as "now".
#[must_use]
pub fn apply_filters(users: &[UserRecord], criteria: &FilterCriteria) -> FilteredResult {
    apply_filters_at(users, criteria, OffsetDateTime::now_utc())
}

/// Filter `users` against `criteria`, evaluating the recency predicate
/// relative to `now`.
#[must_use]
pub fn apply_filters_at(
    users: &[UserRecord],
    criteria: &FilterCriteria,
    now: OffsetDateTime,
) -> FilteredResult {
    let filter = CompiledFilter::compile(criteria, now);
    let users: Vec<UserRecord> = users
        .iter()
        .filter(|user| filter.matches(user))
        .cloned()
        .collect();

    tracing::debug!(matched = users.len(), "Applied user filters");

    FilteredResult {
        total_count: users.len(),
        users,
    }
}

/// Criteria with free text lowered and dates parsed, ready to test records.
#[derive(Debug, Clone, Default)]
struct CompiledFilter {
    needle: Option<String>,
    role: Option<Role>,
    status: Option<UserStatus>,
    registered_from: Option<OffsetDateTime>,
    registered_to: Option<OffsetDateTime>,
    last_login_since: Option<LoginThreshold>,
}

#[derive(Debug, Clone, Copy)]
enum LoginThreshold {
    Since(OffsetDateTime),
    /// `now - N days` underflowed; any recorded login qualifies.
    AnyLogin,
}

impl CompiledFilter {
    fn compile(criteria: &FilterCriteria, now: OffsetDateTime) -> Self {
        let needle = criteria
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let registered_from = criteria
            .date_from
            .as_deref()
            .and_then(|raw| parse_bound(raw, Bound::StartOfDay));
        let registered_to = criteria
            .date_to
            .as_deref()
            .and_then(|raw| parse_bound(raw, Bound::EndOfDay));

        let last_login_since = criteria.last_login_days.map(|days| {
            now.checked_sub(Duration::days(i64::from(days)))
                .map_or(LoginThreshold::AnyLogin, LoginThreshold::Since)
        });

        Self {
            needle,
            role: criteria.role,
            status: criteria.status,
            registered_from,
            registered_to,
            last_login_since,
        }
    }

    fn matches(&self, user: &UserRecord) -> bool {
        self.matches_text(user)
            && self.role.is_none_or(|role| user.role() == role)
            && self.status.is_none_or(|status| user.status == status)
            && self
                .registered_from
                .is_none_or(|from| user.registered_at >= from)
            && self.registered_to.is_none_or(|to| user.registered_at <= to)
            && self.matches_recency(user)
    }

    fn matches_text(&self, user: &UserRecord) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        contains_ci(&user.display_name, needle)
            || contains_ci(&user.email, needle)
            || user
                .phone
                .as_deref()
                .is_some_and(|phone| contains_ci(phone, needle))
    }

    fn matches_recency(&self, user: &UserRecord) -> bool {
        match (self.last_login_since, user.last_login_at) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(LoginThreshold::AnyLogin), Some(_)) => true,
            (Some(LoginThreshold::Since(threshold)), Some(at)) => at >= threshold,
        }
    }
}

/// Case-insensitive substring test; `needle` must already be lowercase.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    StartOfDay,
    EndOfDay,
}

/// Parse a date bound typed into the filter form.
///
/// Accepts a calendar date (`2024-03-01`) or an RFC 3339 timestamp. Plain
/// dates are read as UTC. An upper bound is widened to the last millisecond
/// of its calendar day. Returns `None` for anything unparseable.
fn parse_bound(raw: &str, bound: Bound) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .or_else(|_| OffsetDateTime::parse(raw, &Rfc3339));

    match parsed {
        Ok(instant) => Some(match bound {
            Bound::StartOfDay => instant,
            Bound::EndOfDay => instant.replace_time(time!(23:59:59.999)),
        }),
        Err(e) => {
            tracing::debug!(value = raw, error = %e, "Ignoring unparseable date bound");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{REGISTERED, names, sample_users, user};
    use time::macros::datetime;
    use user_console_sdk::RoleProfile;

    const NOW: OffsetDateTime = datetime!(2024-06-30 12:00 UTC);

    fn criteria_with_query(q: &str) -> FilterCriteria {
        FilterCriteria {
            query: Some(q.to_owned()),
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let users = sample_users();
        let result = apply_filters_at(&users, &FilterCriteria::default(), NOW);
        assert_eq!(result.users, users);
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn text_query_matches_names_in_original_order() {
        let users = sample_users();
        let result = apply_filters_at(&users, &criteria_with_query("jo"), NOW);
        assert_eq!(names(&result.users), vec!["John Doe", "Bob Johnson"]);
        assert_eq!(result.total_count, 2);
    }

    #[test]
    fn text_query_is_case_insensitive_and_covers_email_and_phone() {
        let mut users = sample_users();
        users[1].phone = Some("+33 6 12 34 56 78".to_owned());

        let by_email = apply_filters_at(&users, &criteria_with_query("SMITH@EXAMPLE"), NOW);
        assert_eq!(names(&by_email.users), vec!["Jane Smith"]);

        let by_phone = apply_filters_at(&users, &criteria_with_query("12 34"), NOW);
        assert_eq!(names(&by_phone.users), vec!["Jane Smith"]);
    }

    #[test]
    fn blank_query_is_no_constraint() {
        let users = sample_users();
        let result = apply_filters_at(&users, &criteria_with_query("   "), NOW);
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let users = sample_users();
        let result = apply_filters_at(&users, &criteria_with_query("  jo "), NOW);
        assert_eq!(names(&result.users), vec!["John Doe", "Bob Johnson"]);
    }

    #[test]
    fn role_and_status_filters_are_exact() {
        let users = sample_users();
        let criteria = FilterCriteria {
            role: Some(Role::Tutor),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert!(result.users.iter().all(|u| u.role() == Role::Tutor));
        assert!(
            users
                .iter()
                .filter(|u| !result.users.contains(u))
                .all(|u| u.role() != Role::Tutor)
        );

        let criteria = FilterCriteria {
            status: Some(UserStatus::Active),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert_eq!(names(&result.users), vec!["John Doe", "Jane Smith"]);
    }

    #[test]
    fn huge_recency_window_keeps_every_recorded_login() {
        let mut users = sample_users();
        users[0].last_login_at = Some(datetime!(1970-01-01 00:00 UTC));
        users[2].last_login_at = Some(NOW - Duration::days(1));

        let criteria = FilterCriteria {
            last_login_days: Some(u32::MAX),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert_eq!(names(&result.users), vec!["John Doe", "Bob Johnson"]);
    }

    #[test]
    fn predicates_are_anded() {
        let users = sample_users();
        let criteria = FilterCriteria {
            query: Some("jo".to_owned()),
            status: Some(UserStatus::Active),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert_eq!(names(&result.users), vec!["John Doe"]);
    }

    fn dated_users() -> Vec<UserRecord> {
        let registered = [
            ("Early", datetime!(2024-01-01 08:00 UTC)),
            ("Late", datetime!(2024-02-10 23:30 UTC)),
            ("After", datetime!(2024-02-11 00:00 UTC)),
        ];
        registered
            .into_iter()
            .zip(10u128..)
            .map(|((name, at), n)| {
                let email = format!("{}@example.com", name.to_lowercase());
                let mut u = user(n, name, &email, RoleProfile::student(), UserStatus::Active);
                u.registered_at = at;
                u
            })
            .collect()
    }

    #[test]
    fn date_to_covers_the_whole_day() {
        let users = dated_users();
        let criteria = FilterCriteria {
            date_to: Some("2024-02-10".to_owned()),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert_eq!(names(&result.users), vec!["Early", "Late"]);
    }

    #[test]
    fn date_from_is_inclusive() {
        let users = dated_users();
        let criteria = FilterCriteria {
            date_from: Some("2024-02-11".to_owned()),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert_eq!(names(&result.users), vec!["After"]);
    }

    #[test]
    fn date_range_narrows_date_from_alone() {
        let users = dated_users();
        let from_only = FilterCriteria {
            date_from: Some("2024-01-01".to_owned()),
            ..FilterCriteria::default()
        };
        let range = FilterCriteria {
            date_to: Some("2024-02-10".to_owned()),
            ..from_only.clone()
        };
        let wide = apply_filters_at(&users, &from_only, NOW);
        let narrow = apply_filters_at(&users, &range, NOW);
        assert!(narrow.users.iter().all(|u| wide.users.contains(u)));
        assert!(wide.users.iter().all(|u| users.contains(u)));
        assert_eq!(narrow.total_count, 2);
    }

    #[test]
    fn rfc3339_bounds_are_accepted() {
        let users = dated_users();
        let criteria = FilterCriteria {
            date_from: Some("2024-02-10T12:00:00Z".to_owned()),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert_eq!(names(&result.users), vec!["Late", "After"]);
    }

    #[test]
    fn malformed_dates_are_ignored() {
        let users = dated_users();
        let criteria = FilterCriteria {
            date_from: Some("not-a-date".to_owned()),
            date_to: Some("2024-13-45".to_owned()),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn recency_filter_requires_a_recent_login() {
        let mut users = sample_users();
        users[0].last_login_at = Some(NOW - Duration::days(2));
        users[1].last_login_at = Some(NOW - Duration::days(30));

        let criteria = FilterCriteria {
            last_login_days: Some(7),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert_eq!(names(&result.users), vec!["John Doe"]);

        let criteria = FilterCriteria {
            last_login_days: Some(30),
            ..FilterCriteria::default()
        };
        let result = apply_filters_at(&users, &criteria, NOW);
        assert_eq!(names(&result.users), vec!["John Doe", "Jane Smith"]);
    }

    #[test]
    fn filtering_does_not_touch_the_source() {
        let users = sample_users();
        let before = users.clone();
        let _ = apply_filters_at(&users, &criteria_with_query("jane"), NOW);
        assert_eq!(users, before);
        assert_eq!(users[0].registered_at, REGISTERED);
    }
}
