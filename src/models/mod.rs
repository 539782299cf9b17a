//! Data models for the global search palette.
//!
//! - [`SearchableItem`] - One navigable entry of the result index
//! - [`Category`] - Closed set of item kinds, each with a display label
//! - [`ItemMetadata`] - Advisory display hints (status, date, count, accent color)
//! - [`SearchEvent`] - Fire-and-forget analytics records
//!
//! All models derive serde traits so indexes can be loaded from JSON and
//! analytics events can be appended to JSONL logs.

pub mod event;
pub mod item;

pub use event::SearchEvent;
pub use item::{Category, ItemMetadata, SearchableItem};
