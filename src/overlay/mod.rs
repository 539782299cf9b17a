//! Global search overlay state machine
//!
//! [`GlobalSearch`] ties the search core together:
//!
//! - **Lifecycle**: `Closed` → `OpenEmpty` on [`GlobalSearch::open`], then
//!   `OpenResults` / `OpenNoResults` once a typed term survives the debounce
//!   window, back to `Closed` on Escape, explicit close or selection
//! - **Cursor**: clamped index into the flattened results, reset whenever the
//!   list is recomputed
//! - **Selection**: recent-search insert, click analytics, close, then
//!   navigation through the host's [`Navigator`]
//!
//! Time is passed in by the host, so the whole machine is deterministic.

mod navigator;
mod palette;
mod state;

pub use navigator::Navigator;
pub use palette::{GlobalSearch, Selection};
pub use state::{OverlayKey, OverlayState};
