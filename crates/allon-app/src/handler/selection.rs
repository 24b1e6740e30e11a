//! Selection and configuration submission handlers

use allon_core::prelude::*;
use allon_core::ProjectId;

use crate::confirm_dialog::ConfirmDialogState;
use crate::state::AppState;
use crate::status::StatusKind;

use super::{UpdateAction, UpdateResult};

/// Select a project of the displayed page
pub fn select_project(state: &mut AppState, id: ProjectId) -> UpdateResult {
    let Some(index) = state.projects.iter().position(|p| p.id == id) else {
        warn!("Ignoring selection of {}: not on the current page", id);
        return UpdateResult::none();
    };

    let name = state.projects[index].name.clone();
    state.page.selected_project_id = Some(id);
    state.cursor = index;
    state.set_status(StatusKind::Success, format!("Selected: {name}"));
    UpdateResult::none()
}

pub fn load_selected_project(state: &mut AppState) -> UpdateResult {
    match state.page.selected_project_id.clone() {
        Some(id) => load_project(state, id),
        None => {
            state.set_status(StatusKind::Error, Error::NoSelection.to_string());
            UpdateResult::none()
        }
    }
}

/// Validate a project and ask for confirmation before applying it
pub fn load_project(state: &mut AppState, id: ProjectId) -> UpdateResult {
    if state.applying.is_some() {
        debug!("Configuration submission in flight, ignoring load of {}", id);
        return UpdateResult::none();
    }

    let Some(project) = state.find_project(&id) else {
        let err = Error::project_not_found(id.as_str());
        warn!("{}", err);
        state.set_status(StatusKind::Error, err.to_string());
        return UpdateResult::none();
    };

    if !project.has_config() {
        let err = Error::missing_config(project.name.as_str());
        warn!("{}", err);
        state.set_status(StatusKind::Error, err.to_string());
        return UpdateResult::none();
    }

    let dialog = ConfirmDialogState::load_project(project);
    state.show_confirm_dialog(dialog);
    UpdateResult::none()
}

pub fn confirm_load(state: &mut AppState) -> UpdateResult {
    let Some(dialog) = state.hide_confirm_dialog() else {
        return UpdateResult::none();
    };

    if state.applying.is_some() {
        debug!("Configuration submission in flight, ignoring confirm");
        return UpdateResult::none();
    }

    let Some(project) = state.find_project(&dialog.project_id).cloned() else {
        let err = Error::project_not_found(dialog.project_id.as_str());
        state.set_status(StatusKind::Error, err.to_string());
        return UpdateResult::none();
    };

    info!("Applying configuration of {} ({})", project.name, project.id);
    state.applying = Some(project.id.clone());
    state.set_status(StatusKind::Loading, "Loading configuration...");

    UpdateResult::action(UpdateAction::ApplyProject {
        project: Box::new(project),
    })
}

pub fn cancel_load(state: &mut AppState) -> UpdateResult {
    if let Some(dialog) = state.hide_confirm_dialog() {
        debug!("Cancelled loading {}", dialog.project_id);
    }
    UpdateResult::none()
}

pub fn handle_config_applied(
    state: &mut AppState,
    id: ProjectId,
    message: Option<String>,
) -> UpdateResult {
    state.applying = None;

    let name = state
        .find_project(&id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| id.to_string());
    info!("Configuration of {} applied", name);

    let text = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Configuration \"{name}\" loaded successfully"));
    state.set_status(StatusKind::Success, text);
    UpdateResult::none()
}

pub fn handle_config_apply_failed(
    state: &mut AppState,
    id: ProjectId,
    error: String,
) -> UpdateResult {
    state.applying = None;
    warn!("Applying configuration of {} failed: {}", id, error);
    state.set_status(
        StatusKind::Error,
        format!("Error loading configuration: {error}"),
    );
    UpdateResult::none()
}
