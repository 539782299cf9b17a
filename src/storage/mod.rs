//! Durable storage seam for recent searches
//!
//! The search core only depends on the [`RecentStore`] trait. Two backends:
//! - [`JsonFileStore`]: `recent-searches.json` in the data directory, written
//!   atomically (temp file + rename) on every mutation
//! - [`MemoryStore`]: session-only, for hosts without a writable disk
//!
//! Store failures never reach the user: [`RecentSearches`] logs them and
//! falls back to in-memory behavior for the rest of the session.
//!
//! [`RecentSearches`]: crate::search::RecentSearches

pub mod persistence;

pub use persistence::{JsonFileStore, MemoryStore, RECENT_FILENAME, RecentStore};
