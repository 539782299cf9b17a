use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Page + status bar layout, with the overlay popup floating above the page
pub struct AppLayout {
    pub page_area: Rect,
    pub status_area: Rect,
    pub overlay_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Page
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            page_area: vertical_chunks[0],
            status_area: vertical_chunks[1],
            overlay_area: overlay_rect(vertical_chunks[0]),
        }
    }
}

/// Popup anchored near the top: 80% width (at most 90 columns), 80% height
fn overlay_rect(area: Rect) -> Rect {
    let width = (area.width * 4 / 5).clamp(area.width.min(20), 90);
    let height = (area.height * 4 / 5).max(area.height.min(5));

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Start)
        .vertical_margin(area.height.saturating_sub(height) / 4)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(row);
    popup
}

/// Split the popup into input, body and footer rows
pub fn overlay_sections(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Min(1),    // Recents + results
            Constraint::Length(1), // Footer
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}
