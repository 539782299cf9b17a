//! Result index for the global search palette
//!
//! The index is a static, immutable list of [`SearchableItem`]s with unique ids.
//! It is either the built-in dashboard catalogue or loaded from a JSON file:
//!
//! - **Validation**: empty or duplicate ids reject the whole index, since the
//!   overlay reports clicks by id.
//! - **Sanitization**: text from user-supplied files is stripped of terminal
//!   control sequences before it reaches the TUI or stdout.
//!
//! [`SearchableItem`]: crate::models::SearchableItem

pub mod builder;
pub mod builtin;

pub use builder::{SearchIndex, load_index};
pub use builtin::builtin_items;
