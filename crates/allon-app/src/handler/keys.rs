//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
    }
}

/// Handle key events while the confirm dialog is open
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmLoad),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelLoad),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the project list
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Cursor
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),

        // ─────────────────────────────────────────────────────────
        // Selection & Loading
        // ─────────────────────────────────────────────────────────
        InputKey::Char(' ') => state
            .project_under_cursor()
            .map(|p| Message::SelectProject(p.id.clone())),
        InputKey::Enter => state
            .project_under_cursor()
            .map(|p| Message::LoadProject(p.id.clone())),
        InputKey::Char('L') => Some(Message::LoadSelectedProject),

        // ─────────────────────────────────────────────────────────
        // Pagination
        // ─────────────────────────────────────────────────────────
        InputKey::Left | InputKey::Char('h' | 'p') => Some(Message::PreviousPage),
        InputKey::Right | InputKey::Char('l' | 'n') => Some(Message::NextPage),
        InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(Message::GoToPage),
        InputKey::Char('r') => Some(Message::Refresh),

        _ => None,
    }
}
