//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, pages, selection, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.expire_status(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fetch & Pagination
        // ─────────────────────────────────────────────────────────
        Message::LoadPage { page, show_spinner } => pages::load_page(state, page, show_spinner),
        Message::GoToPage(page) => pages::go_to_page(state, page),
        Message::PreviousPage => pages::previous_page(state),
        Message::NextPage => pages::next_page(state),
        Message::Refresh => pages::refresh(state),
        Message::PageLoaded { page, result } => pages::handle_page_loaded(state, page, result),
        Message::PageLoadFailed { page, error } => {
            pages::handle_page_load_failed(state, page, error)
        }

        // ─────────────────────────────────────────────────────────
        // Cursor
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => {
            state.move_cursor_up();
            UpdateResult::none()
        }
        Message::CursorDown => {
            state.move_cursor_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection & Configuration Submission
        // ─────────────────────────────────────────────────────────
        Message::SelectProject(id) => selection::select_project(state, id),
        Message::LoadProject(id) => selection::load_project(state, id),
        Message::LoadSelectedProject => selection::load_selected_project(state),
        Message::ConfirmLoad => selection::confirm_load(state),
        Message::CancelLoad => selection::cancel_load(state),
        Message::ConfigApplied { id, message } => {
            selection::handle_config_applied(state, id, message)
        }
        Message::ConfigApplyFailed { id, error } => {
            selection::handle_config_apply_failed(state, id, error)
        }
    }
}
