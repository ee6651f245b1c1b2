//! Per-view state of the user list: criteria, paging and the search box.
//!
//! Every criteria change re-runs the full filter pass. The free-text query
//! only arrives here once it has settled (see [`crate::debounce`]).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tokio::time::Instant;
use user_console_sdk::{
    FilterCriteria, Role, SortDir, SortKey, Statistics, UserRecord, UserStatus,
};

use super::filter::{FilteredResult, apply_filters};
use super::navigation::{NavKey, NavState, SuggestionNavigator};
use super::page::{Page, paginate};
use super::sort::sort_users;
use super::statistics::compute_statistics;
use super::suggestions::{SuggestionLimits, SuggestionSet, update_suggestions_with};
use crate::config::UserConsoleConfig;
use crate::store::{SubscriptionId, UserStore};

/// What the user list renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleView {
    pub page: Page<UserRecord>,
    pub suggestions: Vec<String>,
    pub navigation: NavState,
    /// Computed over the whole collection, not the filtered page.
    pub statistics: Statistics,
    pub loading: bool,
}

pub struct ConsoleSession {
    store: Arc<UserStore>,
    config: UserConsoleConfig,
    criteria: FilterCriteria,
    page_index: usize,
    page_size: u32,
    navigator: SuggestionNavigator,
    filtered: FilteredResult,
    stale: Arc<AtomicBool>,
    subscription: SubscriptionId,
}

impl ConsoleSession {
    #[must_use]
    pub fn new(store: Arc<UserStore>, config: UserConsoleConfig) -> Self {
        let stale = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&stale);
        let subscription = store
            .users_observable()
            .subscribe(move |_| flag.store(true, Ordering::Release));

        Self {
            page_size: config.clamp_page_size(None),
            navigator: SuggestionNavigator::new(config.blur_grace()),
            store,
            config,
            criteria: FilterCriteria::default(),
            page_index: 0,
            filtered: FilteredResult::default(),
            stale,
            subscription,
        }
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn navigator(&self) -> &SuggestionNavigator {
        &self.navigator
    }

    /// Result of the last filter pass (all pages).
    pub fn filtered(&mut self) -> &FilteredResult {
        self.refresh_if_stale();
        &self.filtered
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.criteria.role = role;
        self.criteria_changed();
    }

    pub fn set_status(&mut self, status: Option<UserStatus>) {
        self.criteria.status = status;
        self.criteria_changed();
    }

    pub fn set_date_from(&mut self, date: Option<String>) {
        self.criteria.date_from = date;
        self.criteria_changed();
    }

    pub fn set_date_to(&mut self, date: Option<String>) {
        self.criteria.date_to = date;
        self.criteria_changed();
    }

    pub fn set_last_login_days(&mut self, days: Option<u32>) {
        self.criteria.last_login_days = days;
        self.criteria_changed();
    }

    pub fn set_sort(&mut self, key: Option<SortKey>, dir: SortDir) {
        self.criteria.sort_by = key;
        self.criteria.sort_direction = dir;
        self.criteria_changed();
    }

    /// Replace every criterion at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.criteria_changed();
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.navigator.set_suggestions(SuggestionSet::default());
        self.criteria_changed();
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    pub fn set_page_size(&mut self, page_size: Option<u32>) {
        self.page_size = self.config.clamp_page_size(page_size);
        self.page_index = 0;
    }

    /// Apply a settled search query: re-filter and refresh suggestions.
    pub fn on_query_settled(&mut self, query: &str) {
        self.set_query(query);
        let limits = SuggestionLimits {
            min_chars: self.config.suggestion_min_chars,
            max_items: self.config.suggestion_limit,
        };
        let suggestions = update_suggestions_with(query, &self.store.users(), limits);
        self.navigator.set_suggestions(suggestions);
    }

    /// Forward a key press to the suggestion list. A committed suggestion
    /// becomes the query.
    pub fn handle_key(&mut self, key: NavKey) -> Option<String> {
        let committed = self.navigator.handle_key(key)?;
        self.set_query(&committed);
        Some(committed)
    }

    pub fn click_suggestion(&mut self, index: usize) -> Option<String> {
        let committed = self.navigator.click(index)?;
        self.set_query(&committed);
        Some(committed)
    }

    pub fn focus_search(&mut self) {
        self.navigator.focus();
    }

    pub fn blur_search(&mut self, now: Instant) {
        self.navigator.blur(now);
    }

    /// Apply a due blur close. Returns whether the list closed.
    pub fn poll_blur(&mut self, now: Instant) -> bool {
        self.navigator.poll(now)
    }

    /// Project the current state, re-filtering first if the store changed.
    pub fn view(&mut self) -> ConsoleView {
        self.refresh_if_stale();
        let page = paginate(
            &self.filtered.users,
            self.page_index,
            usize::try_from(self.page_size).unwrap_or(usize::MAX),
        );
        self.page_index = page.page_info.page_index;

        let users = self.store.users();
        ConsoleView {
            page,
            suggestions: self.navigator.suggestions().items().to_vec(),
            navigation: self.navigator.state(),
            statistics: compute_statistics(&users),
            loading: self.store.is_loading(),
        }
    }

    fn set_query(&mut self, query: &str) {
        let query = query.trim();
        self.criteria.query = (!query.is_empty()).then(|| query.to_owned());
        self.criteria_changed();
    }

    fn criteria_changed(&mut self) {
        self.page_index = 0;
        self.refilter();
    }

    fn refresh_if_stale(&mut self) {
        if self.stale.load(Ordering::Acquire) {
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        self.stale.store(false, Ordering::Release);
        let users = self.store.users();
        let mut result = apply_filters(&users, &self.criteria);
        if let Some(key) = self.criteria.sort_by {
            sort_users(&mut result.users, key, self.criteria.sort_direction);
        }
        tracing::debug!(
            total = users.len(),
            matched = result.total_count,
            "Refreshed user list"
        );
        self.filtered = result;
    }
}

impl Drop for ConsoleSession {
    fn drop(&mut self) {
        self.store.users_observable().unsubscribe(self.subscription);
    }
}
