use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::dates::format_item_date;
use super::layout::{AppLayout, overlay_sections};
use super::router::Router;
use crate::models::{Category, SearchableItem};
use crate::overlay::{GlobalSearch, OverlayState};
use crate::search::config::RECENT_CHIPS_SHOWN;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const BAR_BG: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);
const SELECTED_BG: Color = Color::Rgb(39, 39, 42);

const PLACEHOLDER: &str = "Search agents, campaigns...";

/// Everything the renderer reads from the app
pub struct RenderState<'a> {
    pub search: &'a GlobalSearch,
    pub router: &'a Router,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_page(frame, layout.page_area, state.router);
    render_status_bar(frame, layout.status_area, state);

    if state.search.is_open() {
        render_overlay(frame, layout.overlay_area, state.search);
    }
}

fn render_page(frame: &mut Frame, area: Rect, router: &Router) {
    let title = router.page_title().unwrap_or("Page not found");

    let mut lines = vec![
        Line::from(Span::styled(title, Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("Route: ", Style::default().fg(MUTED)),
            Span::raw(router.current().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Ctrl+K or / to search agents, campaigns, contacts, calls and more.",
            Style::default().fg(MUTED),
        )),
    ];
    if router.history_len() > 0 {
        lines.push(Line::from(Span::styled(
            format!("Backspace: back ({} pages visited)", router.history_len()),
            Style::default().fg(MUTED),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Trudy "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (text, fg) = match state.status_message {
        Some(msg) => {
            let fg = match msg.message_type {
                MessageType::Success => BRIGHT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", msg.text), fg)
        }
        None if state.search.is_open() => {
            (" [SEARCH] ↑↓: navigate | Enter: open | Esc: close | Ctrl+C: quit ".to_string(), BRIGHT)
        }
        None => (
            format!(
                " {} | Ctrl+K: search | Backspace: back | q: quit ",
                state.router.page_title().unwrap_or(state.router.current())
            ),
            BRIGHT,
        ),
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(BAR_BG));
    frame.render_widget(paragraph, area);
}

fn render_overlay(frame: &mut Frame, area: Rect, search: &GlobalSearch) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Search ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (input_area, body_area, footer_area) = overlay_sections(inner);
    render_input(frame, input_area, search.term());
    render_body(frame, body_area, search);
    render_footer(frame, footer_area, search);
}

fn render_input(frame: &mut Frame, area: Rect, term: &str) {
    let content = if term.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(MUTED)))
    } else {
        Line::from(Span::styled(term.to_string(), Style::default().fg(BRIGHT)))
    };

    let paragraph = Paragraph::new(content).block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)),
    );
    frame.render_widget(paragraph, area);

    let typed_width = Line::from(term).width() as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    frame.set_cursor_position(((area.x + 1 + typed_width).min(max_x), area.y + 1));
}

fn render_body(frame: &mut Frame, area: Rect, search: &GlobalSearch) {
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;

    let recent = search.recent();
    if search.term().trim().is_empty() && !recent.is_empty() {
        items.push(section_header("Recent Searches  (Alt+1-6 reuse, Ctrl+D clear)", MUTED));
        let chips: Vec<Span> = recent
            .terms()
            .iter()
            .take(RECENT_CHIPS_SHOWN)
            .enumerate()
            .flat_map(|(i, term)| {
                [
                    Span::styled(format!("[{}] ", i + 1), Style::default().fg(MUTED)),
                    Span::styled(format!("{}  ", term), Style::default().fg(BRIGHT)),
                ]
            })
            .collect();
        items.push(ListItem::new(Line::from(chips)));
        items.push(ListItem::new(""));
    }

    match search.state() {
        OverlayState::OpenNoResults => {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("No results found for \"{}\"", search.applied_term().trim()),
                Style::default().fg(BRIGHT),
            ))));
            items.push(ListItem::new(Line::from(Span::styled(
                "Try searching for agents, campaigns, contacts, or calls",
                Style::default().fg(MUTED),
            ))));
        }
        OverlayState::OpenEmpty => {
            if recent.is_empty() {
                items.push(ListItem::new(Line::from(Span::styled(
                    "Start typing to search across your platform",
                    Style::default().fg(BRIGHT),
                ))));
                items.push(ListItem::new(""));
            }
            items.push(section_header("Popular Items", MUTED));
            for (position, item) in search.result_items().enumerate() {
                if position == search.cursor() {
                    selected_row = Some(items.len());
                }
                items.push(result_item(item, position == search.cursor()));
            }
        }
        OverlayState::OpenResults => {
            for group in search.groups() {
                items.push(section_header(
                    &format!("{} ({})", group.category.label(), group.entries.len()),
                    category_color(group.category),
                ));
                for (position, item) in group.entries {
                    if position == search.cursor() {
                        selected_row = Some(items.len());
                    }
                    items.push(result_item(item, position == search.cursor()));
                }
            }
        }
        OverlayState::Closed => {}
    }

    let mut list_state = ListState::default().with_selected(selected_row);
    frame.render_stateful_widget(List::new(items), area, &mut list_state);
}

fn section_header(text: &str, color: Color) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
}

fn result_item(item: &SearchableItem, selected: bool) -> ListItem<'static> {
    let mut first = vec![Span::styled(
        format!("  {}", item.title),
        Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
    )];

    if let Some(status) = item.status() {
        let badge_bg = item
            .metadata
            .as_ref()
            .and_then(|m| m.color.as_deref())
            .and_then(parse_hex_color)
            .unwrap_or(MUTED);
        first.push(Span::raw(" "));
        first.push(Span::styled(format!(" {} ", status), Style::default().fg(BRIGHT).bg(badge_bg)));
    }
    if let Some(date) = item.metadata.as_ref().and_then(|m| m.date) {
        first.push(Span::styled(format!("  {}", format_item_date(&date)), Style::default().fg(MUTED)));
    }
    if let Some(count) = item.metadata.as_ref().and_then(|m| m.count) {
        first.push(Span::styled(format!("  {} items", count), Style::default().fg(MUTED)));
    }

    let second = Line::from(Span::styled(
        format!("    {}", item.description),
        Style::default().fg(MUTED),
    ));

    let style = if selected { Style::default().bg(SELECTED_BG) } else { Style::default() };
    ListItem::new(Text::from(vec![Line::from(first), second])).style(style)
}

fn render_footer(frame: &mut Frame, area: Rect, search: &GlobalSearch) {
    if search.results().is_empty() {
        return;
    }

    let hints = Paragraph::new(" ↑↓ Navigate   ↵ Select   Esc Close").style(Style::default().fg(MUTED));
    let count = Paragraph::new(format!("{} results ", search.results().len()))
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Right);

    frame.render_widget(hints, area);
    frame.render_widget(count, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Agent => Color::Rgb(59, 130, 246),
        Category::Campaign => Color::Rgb(147, 51, 234),
        Category::Contact => Color::Rgb(22, 163, 74),
        Category::Call => Color::Rgb(234, 88, 12),
        Category::VoiceClone => Color::Rgb(219, 39, 119),
        Category::Analytics => Color::Rgb(79, 70, 229),
    }
}

/// Parse `#RRGGBB`
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8))
}
