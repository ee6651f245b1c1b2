use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the user console module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConsoleConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    /// Quiet period before a typed search query is applied.
    pub search_debounce_ms: u64,
    /// Delay between losing focus and hiding the suggestion list, so a
    /// pointer click on a suggestion still lands.
    pub blur_grace_ms: u64,
    pub suggestion_min_chars: usize,
    pub suggestion_limit: usize,
    pub max_display_name_length: usize,
}

impl Default for UserConsoleConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            search_debounce_ms: 300,
            blur_grace_ms: 200,
            suggestion_min_chars: 2,
            suggestion_limit: 5,
            max_display_name_length: 100,
        }
    }
}

impl UserConsoleConfig {
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    #[must_use]
    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }

    /// Clamp a requested page size into `[1, max_page_size]`.
    #[must_use]
    pub fn clamp_page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size.max(1))
    }
}
