//! Autocomplete suggestions for the user search box.

use serde::Serialize;
use user_console_sdk::UserRecord;

use super::filter::contains_ci;

/// Limits applied when collecting suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionLimits {
    /// Queries shorter than this (in characters, after trimming) yield nothing.
    pub min_chars: usize,
    /// Maximum number of distinct suggestions.
    pub max_items: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            min_chars: 2,
            max_items: 5,
        }
    }
}

/// Distinct completions in first-seen scan order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SuggestionSet {
    items: Vec<String>,
}

impl SuggestionSet {
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the suggestion list should be shown.
    #[must_use]
    pub fn has_suggestions(&self) -> bool {
        !self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    fn push_unique(&mut self, value: &str) {
        if !self.items.iter().any(|existing| existing == value) {
            self.items.push(value.to_owned());
        }
    }
}

impl From<Vec<String>> for SuggestionSet {
    fn from(values: Vec<String>) -> Self {
        let mut set = Self::default();
        for value in &values {
            set.push_unique(value);
        }
        set
    }
}

/// Suggestions for `query` with the default limits (2 characters, 5 items).
#[must_use]
pub fn update_suggestions(query: &str, users: &[UserRecord]) -> SuggestionSet {
    update_suggestions_with(query, users, SuggestionLimits::default())
}

/// Collect display names, emails and role tokens containing `query`.
///
/// Each record contributes its name, then its email, then its role token,
/// in original case. Collection stops once `limits.max_items` distinct values
/// are found.
#[must_use]
pub fn update_suggestions_with(
    query: &str,
    users: &[UserRecord],
    limits: SuggestionLimits,
) -> SuggestionSet {
    let query = query.trim();
    let mut set = SuggestionSet::default();
    if query.chars().count() < limits.min_chars || limits.max_items == 0 {
        return set;
    }

    let needle = query.to_lowercase();
    'scan: for user in users {
        let candidates = [
            user.display_name.as_str(),
            user.email.as_str(),
            user.role().as_token(),
        ];
        for candidate in candidates {
            if contains_ci(candidate, &needle) {
                set.push_unique(candidate);
                if set.len() >= limits.max_items {
                    break 'scan;
                }
            }
        }
    }

    tracing::debug!(count = set.len(), "Computed search suggestions");
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_users, user};
    use user_console_sdk::{RoleProfile, UserStatus};

    #[test]
    fn one_character_query_is_below_cutoff() {
        let users = sample_users();
        assert!(!update_suggestions("a", &users).has_suggestions());
        assert!(update_suggestions("j", &users).is_empty());
        assert!(update_suggestions("", &users).is_empty());
    }

    #[test]
    fn cutoff_applies_to_the_trimmed_query() {
        let users = sample_users();
        assert!(update_suggestions(" j", &users).is_empty());
        assert!(update_suggestions("j  ", &users).is_empty());
        assert_eq!(
            update_suggestions("  jo ", &users),
            update_suggestions("jo", &users)
        );
    }

    #[test]
    fn names_and_emails_in_scan_order() {
        let users = sample_users();
        let set = update_suggestions("jo", &users);
        assert_eq!(
            set.items(),
            ["John Doe", "john.doe@example.com", "Bob Johnson"]
        );
        assert!(set.has_suggestions());
    }

    #[test]
    fn role_tokens_are_suggested_once() {
        let users = sample_users();
        let set = update_suggestions("tut", &users);
        assert_eq!(set.items(), ["TUTOR"]);
    }

    #[test]
    fn duplicates_are_collapsed_and_capped() {
        let users: Vec<_> = (0..10u128)
            .map(|n| {
                let name = if n % 2 == 0 { "Alex Martin" } else { "Alexandra Ruiz" };
                let email = format!("alex{n}@example.com");
                user(n, name, &email, RoleProfile::student(), UserStatus::Active)
            })
            .collect();

        let set = update_suggestions("alex", &users);
        assert_eq!(set.len(), 5);
        assert_eq!(
            set.items(),
            [
                "Alex Martin",
                "alex0@example.com",
                "Alexandra Ruiz",
                "alex1@example.com",
                "alex2@example.com",
            ]
        );
    }

    #[test]
    fn every_suggestion_comes_from_the_data() {
        let users = sample_users();
        let set = update_suggestions("EX", &users);
        for item in set.items() {
            assert!(users.iter().any(|u| {
                u.display_name == *item || u.email == *item || u.role().as_token() == item.as_str()
            }));
        }
    }

    #[test]
    fn custom_limits() {
        let users = sample_users();
        let limits = SuggestionLimits {
            min_chars: 4,
            max_items: 1,
        };
        assert_eq!(update_suggestions_with("john", &users, limits).len(), 1);
        assert!(update_suggestions_with("joh", &users, limits).is_empty());
    }
}
