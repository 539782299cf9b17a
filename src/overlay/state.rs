/// Observable state of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    /// No term: recent searches and default items
    OpenEmpty,
    OpenResults,
    OpenNoResults,
}

impl OverlayState {
    pub fn is_open(self) -> bool {
        !matches!(self, OverlayState::Closed)
    }
}

/// Keys the overlay reacts to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}
