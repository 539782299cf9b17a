//! Search core: debouncing, recent searches, analytics and result filtering
//!
//! These pieces are UI-agnostic. The [`overlay`](crate::overlay) module wires
//! them into the palette state machine; hosts inject time (`Instant`), the
//! analytics sink and the recent-search store.

pub mod analytics;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod recent;

pub use analytics::{AnalyticsSink, JsonlSink, MemorySink, SearchAnalytics, TracingSink};
pub use config::SearchConfig;
pub use debounce::Debouncer;
pub use filter::{FilterOutcome, ResultGroup, ResultMode, filter_items, group_by_category};
pub use recent::RecentSearches;
