//! Fetch and pagination handlers
//!
//! At most one fetch is in flight. Requests made while one is outstanding
//! are dropped, never queued.

use allon_core::prelude::*;
use allon_core::{resolve_bounds, ProjectPage};

use crate::state::AppState;
use crate::status::StatusKind;

use super::{UpdateAction, UpdateResult};

/// Start fetching `page`
pub fn load_page(state: &mut AppState, page: u32, show_spinner: bool) -> UpdateResult {
    if page == 0 {
        warn!("Rejected request for page 0");
        return UpdateResult::none();
    }

    if state.page.is_loading {
        debug!("Fetch in flight, ignoring load of page {}", page);
        return UpdateResult::none();
    }

    state.page.is_loading = true;
    state.page.requested_page = page;
    if show_spinner {
        state.set_status(StatusKind::Loading, "Loading projects...");
    }

    UpdateResult::action(UpdateAction::FetchPage {
        page,
        limit: state.page.page_size,
    })
}

/// Navigate to `page` without the loading banner
pub fn go_to_page(state: &mut AppState, page: u32) -> UpdateResult {
    if page < 1 || page == state.page.current_page || state.page.is_loading {
        debug!(
            "Ignoring navigation to page {} (current {}, loading {})",
            page, state.page.current_page, state.page.is_loading
        );
        return UpdateResult::none();
    }
    load_page(state, page, false)
}

pub fn previous_page(state: &mut AppState) -> UpdateResult {
    if !state.page.has_previous() {
        return UpdateResult::none();
    }
    go_to_page(state, state.page.current_page - 1)
}

/// Advance one page; only offered after a full page
pub fn next_page(state: &mut AppState) -> UpdateResult {
    if !state.page.has_next() {
        return UpdateResult::none();
    }
    go_to_page(state, state.page.current_page.saturating_add(1))
}

pub fn refresh(state: &mut AppState) -> UpdateResult {
    load_page(state, state.page.current_page, true)
}

pub fn handle_page_loaded(state: &mut AppState, page: u32, result: ProjectPage) -> UpdateResult {
    let returned = result.projects.len();
    let bounds = resolve_bounds(
        page,
        returned,
        state.page.page_size,
        result.pagination.as_ref(),
        result.total,
    );

    state.replace_projects(result.projects);

    let page_state = &mut state.page;
    page_state.is_loading = false;
    page_state.current_page = page;
    page_state.returned = returned;
    page_state.total_pages = bounds.total_pages;
    page_state.total_projects = bounds.total_projects;
    page_state.source = bounds.source;
    page_state.load_failed = false;
    page_state.loaded = true;

    info!(
        "Loaded page {} with {} projects ({} pages, {:?})",
        page, returned, bounds.total_pages, bounds.source
    );
    state.set_status(StatusKind::Success, format!("{returned} projects loaded"));
    UpdateResult::none()
}

pub fn handle_page_load_failed(state: &mut AppState, page: u32, error: String) -> UpdateResult {
    warn!("Failed to load page {}: {}", page, error);

    state.clear_projects();

    let page_state = &mut state.page;
    page_state.is_loading = false;
    page_state.current_page = page;
    page_state.returned = 0;
    page_state.load_failed = true;
    page_state.loaded = true;

    state.set_status(
        StatusKind::Error,
        format!("Error loading projects: {error}"),
    );
    UpdateResult::none()
}
