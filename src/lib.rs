//! Trudy Search - global search palette for the Trudy voice-agent dashboard
//!
//! This library is the headless core of the dashboard's Ctrl+K search overlay
//! plus a terminal front end that hosts it. It supports:
//!
//! - Filtering a static result index by a debounced term, grouped by category
//! - A bounded, deduplicated recent-search list persisted to the data directory
//! - Fire-and-forget search and click analytics behind a pluggable sink
//! - An overlay state machine with keyboard navigation and selection
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use trudy_search::{GlobalSearch, RecentSearches, SearchAnalytics, SearchConfig, SearchIndex};
//!
//! let mut search = GlobalSearch::new(
//!     SearchIndex::builtin(),
//!     SearchConfig::default(),
//!     RecentSearches::new(10),
//!     SearchAnalytics::default(),
//! );
//! let start = Instant::now();
//! search.open();
//! search.set_term("voice", start);
//! search.tick(start + Duration::from_millis(150));
//!
//! let mut visited = Vec::new();
//! let selection = search.select(0, &mut |href: &str| visited.push(href.to_string()));
//! assert_eq!(selection.map(|s| s.href), Some("/voice-cloning".to_string()));
//! assert_eq!(search.recent().terms(), ["voice"]);
//! ```

pub mod cli;
pub mod indexer;
pub mod models;
pub mod overlay;
pub mod search;
pub mod storage;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use indexer::{SearchIndex, load_index};
pub use models::{Category, SearchEvent, SearchableItem};
pub use overlay::{GlobalSearch, Navigator, OverlayKey, OverlayState, Selection};
pub use search::{RecentSearches, SearchAnalytics, SearchConfig};
pub use utils::format_path_with_tilde;
