use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    OpenSearch,
    ToggleSearch,
    CloseSearch,
    MoveUp,
    MoveDown,
    Select,
    UpdateSearch(char),
    DeleteChar,
    ClearInput,
    UseRecent(usize),
    ClearRecent,
    Back,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration, overlay_open: bool) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key, overlay_open));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent, overlay_open: bool) -> Action {
    if overlay_open { overlay_key_to_action(key) } else { page_key_to_action(key) }
}

fn page_key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => Action::Quit,

        // Command palette shortcut
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => Action::OpenSearch,
        (KeyCode::Char('/'), KeyModifiers::NONE) => Action::OpenSearch,

        (KeyCode::Backspace, _) => Action::Back,

        _ => Action::None,
    }
}

fn overlay_key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => Action::ToggleSearch,
        (KeyCode::Esc, _) => Action::CloseSearch,

        // Navigation (arrows, Emacs style)
        (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Enter, _) => Action::Select,

        // Recent searches
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::ALT) => {
            Action::UseRecent(c as usize - '1' as usize)
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ClearRecent,

        // Search input
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearInput,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateSearch(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
