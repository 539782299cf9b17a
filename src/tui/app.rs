//! TUI application state and event handling.
//!
//! The [`App`] is the host the search overlay lives in. It owns:
//!
//! - **Router**: current dashboard route, the overlay's navigation target
//! - **Global search**: the palette state machine, opened with Ctrl+K or `/`
//! - **Status messages**: transient feedback after navigation or recent clears
//! - **Dirty state tracking**: redraw only when something changed
//!
//! The event loop polls crossterm with a timeout no longer than the pending
//! debounce window, then ticks the overlay so a typed term is applied on time.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use super::router::Router;
use crate::overlay::{GlobalSearch, OverlayKey};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Upper bound on a single event poll, so expiring status messages redraw
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    search: GlobalSearch,
    router: Router,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
}

impl App {
    pub fn new(search: GlobalSearch, router: Router) -> Self {
        Self { search, router, should_quit: false, status_message: None, needs_redraw: true }
    }

    pub fn search(&self) -> &GlobalSearch {
        &self.search
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn clear_expired_status(&mut self, now: Instant) {
        if self.status_message.as_ref().is_some_and(|msg| now >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.clear_expired_status(now);
            if self.search.tick(now) {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| {
                    let state = RenderState {
                        search: &self.search,
                        router: &self.router,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
            }

            let timeout = self
                .search
                .pending_for(Instant::now())
                .map_or(POLL_INTERVAL, |remaining| remaining.min(POLL_INTERVAL));
            let action = poll_event(timeout, self.search.is_open())?;
            self.handle_action(action, Instant::now());
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::OpenSearch => self.search.open(),
            Action::ToggleSearch => self.search.toggle(),
            Action::CloseSearch => self.overlay_key(OverlayKey::Escape),
            Action::MoveUp => self.overlay_key(OverlayKey::ArrowUp),
            Action::MoveDown => self.overlay_key(OverlayKey::ArrowDown),
            Action::Select => self.overlay_key(OverlayKey::Enter),
            Action::UpdateSearch(c) => self.search.push_char(c, now),
            Action::DeleteChar => self.search.delete_char(now),
            Action::ClearInput => self.search.clear_term(now),
            Action::UseRecent(idx) => {
                if !self.search.use_recent(idx, now) {
                    return;
                }
            }
            Action::ClearRecent => {
                if self.search.recent().is_empty() {
                    return;
                }
                self.search.clear_recent();
                self.set_status("✓ Recent searches cleared", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Action::Back => {
                if !self.router.back() {
                    return;
                }
            }
            Action::None => return,
        }
        self.needs_redraw = true;
    }

    fn overlay_key(&mut self, key: OverlayKey) {
        if let Some(selection) = self.search.handle_key(key, &mut self.router) {
            let message_type = if self.router.page_title().is_some() {
                MessageType::Success
            } else {
                MessageType::Error
            };
            self.set_status(
                format!("→ {} ({})", selection.href, selection.item_id),
                message_type,
                STATUS_SUCCESS_DURATION_MS,
            );
        }
    }
}
