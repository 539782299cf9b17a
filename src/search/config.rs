use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEBOUNCE_MS: u64 = 150;
pub const DEFAULT_MAX_RECENT: usize = 10;
pub const DEFAULT_ITEM_COUNT: usize = 8;
pub const DEFAULT_MAX_RESULTS: usize = 50;
/// Recent searches shown as chips above the default items
pub const RECENT_CHIPS_SHOWN: usize = 6;

/// Tunables of the search palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiescence window before a typed term is applied
    pub debounce_ms: u64,
    /// Bound of the recent-search list
    pub max_recent: usize,
    /// Items shown when the term is empty
    pub default_items: usize,
    /// Cap on matches returned for a term
    pub max_results: usize,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_recent: DEFAULT_MAX_RECENT,
            default_items: DEFAULT_ITEM_COUNT,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}
