//! Keyboard and pointer navigation over the suggestion list.
//!
//! The list is either `Closed` or `Open` with an optional highlighted entry.
//! Losing focus does not close the list immediately: a close is scheduled
//! after a grace delay so that a click on a suggestion can still commit it.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use super::suggestions::SuggestionSet;

/// Keys the search box forwards to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    /// Any other key; it only affects the query text.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NavState {
    #[default]
    Closed,
    Open { selected: Option<usize> },
}

#[derive(Debug, Clone)]
pub struct SuggestionNavigator {
    suggestions: SuggestionSet,
    state: NavState,
    grace: Duration,
    close_at: Option<Instant>,
}

impl SuggestionNavigator {
    #[must_use]
    pub fn new(grace: Duration) -> Self {
        Self {
            suggestions: SuggestionSet::default(),
            state: NavState::Closed,
            grace,
            close_at: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    #[must_use]
    pub fn suggestions(&self) -> &SuggestionSet {
        &self.suggestions
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            NavState::Open { selected } => selected,
            NavState::Closed => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, NavState::Open { .. })
    }

    /// Replace the list. A non-empty list opens with nothing highlighted; an
    /// empty one closes.
    pub fn set_suggestions(&mut self, suggestions: SuggestionSet) {
        self.state = if suggestions.has_suggestions() {
            NavState::Open { selected: None }
        } else {
            NavState::Closed
        };
        self.suggestions = suggestions;
    }

    /// Apply a key press. Returns the committed suggestion when Enter
    /// confirms a highlighted entry.
    pub fn handle_key(&mut self, key: NavKey) -> Option<String> {
        let NavState::Open { selected } = self.state else {
            return None;
        };
        let last = self.suggestions.len().checked_sub(1)?;

        match key {
            NavKey::ArrowDown => {
                let next = selected.map_or(0, |i| (i + 1).min(last));
                self.state = NavState::Open {
                    selected: Some(next),
                };
                None
            }
            NavKey::ArrowUp => {
                self.state = NavState::Open {
                    selected: selected.and_then(|i| i.checked_sub(1)),
                };
                None
            }
            NavKey::Enter => selected.and_then(|i| self.commit(i)),
            NavKey::Escape => {
                self.close();
                None
            }
            NavKey::Other => None,
        }
    }

    /// Pointer selection of the entry at `index`.
    pub fn click(&mut self, index: usize) -> Option<String> {
        if self.is_open() {
            self.commit(index)
        } else {
            None
        }
    }

    /// Focus returned to the search box; cancels a pending close.
    pub fn focus(&mut self) {
        self.close_at = None;
    }

    /// Focus left the search box at `now`; the list closes after the grace
    /// delay unless a suggestion is clicked first.
    pub fn blur(&mut self, now: Instant) {
        if self.is_open() {
            self.close_at = Some(now + self.grace);
        }
    }

    /// When a scheduled close is due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.close_at
    }

    /// Close the list if the blur grace delay has elapsed. Returns whether
    /// it closed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.close_at {
            Some(at) if now >= at => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Wait for a scheduled close and apply it.
    pub async fn settle_blur(&mut self) -> bool {
        let Some(at) = self.close_at else {
            return false;
        };
        tokio::time::sleep_until(at).await;
        self.poll(Instant::now())
    }

    fn commit(&mut self, index: usize) -> Option<String> {
        let value = self.suggestions.get(index)?.to_owned();
        self.close();
        Some(value)
    }

    fn close(&mut self) {
        self.state = NavState::Closed;
        self.close_at = None;
    }
}

impl Default for SuggestionNavigator {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}
