//! Application state (Model in TEA pattern)

use std::collections::HashMap;
use std::time::Instant;

use allon_core::{
    has_next_page, page_links, PageLink, PaginationSource, Project, ProjectId, PAGE_SIZE,
};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::status::{StatusBanner, StatusKind};

/// Lifecycle phase of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Project list with pagination
    #[default]
    Browse,

    /// Modal "apply configuration?" dialog; all other input is blocked
    ConfirmDialog,
}

/// Pagination and selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// 1-based page of the last completed load
    pub current_page: u32,
    pub page_size: usize,
    pub total_pages: u32,
    pub total_projects: u64,
    /// A fetch is in flight
    pub is_loading: bool,
    /// Page of the most recent fetch
    pub requested_page: u32,
    /// Always an id of the displayed page
    pub selected_project_id: Option<ProjectId>,
    /// Items returned by the last successful load
    pub returned: usize,
    pub source: PaginationSource,
    /// The last load failed
    pub load_failed: bool,
    /// At least one load has completed
    pub loaded: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PAGE_SIZE,
            total_pages: 0,
            total_projects: 0,
            is_loading: false,
            requested_page: 1,
            selected_project_id: None,
            returned: 0,
            source: PaginationSource::default(),
            load_failed: false,
            loaded: false,
        }
    }
}

impl PageState {
    /// "Next" is offered only after a full page
    pub fn has_next(&self) -> bool {
        !self.load_failed && has_next_page(self.returned, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Pagination controls are hidden before the first load, after a failed
    /// load, and when the first page is empty.
    pub fn show_pagination(&self) -> bool {
        self.loaded && !self.load_failed && !(self.current_page == 1 && self.returned == 0)
    }

    pub fn page_links(&self) -> Vec<PageLink> {
        page_links(self.current_page, self.has_next())
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,

    pub page: PageState,

    /// Projects of the displayed page, in server order
    pub projects: Vec<Project>,

    /// Every project seen since startup, for resolving ids off the current page
    pub known_projects: HashMap<ProjectId, Project>,

    /// Keyboard cursor into `projects`
    pub cursor: usize,

    pub status: Option<StatusBanner>,

    pub confirm_dialog: Option<ConfirmDialogState>,

    /// Project whose configuration is being applied
    pub applying: Option<ProjectId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::default(),
            ui_mode: UiMode::default(),
            settings,
            page: PageState::default(),
            projects: Vec::new(),
            known_projects: HashMap::new(),
            cursor: 0,
            status: None,
            confirm_dialog: None,
            applying: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// A fetch or a configuration submission is outstanding
    pub fn is_busy(&self) -> bool {
        self.page.is_loading || self.applying.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Projects
    // ─────────────────────────────────────────────────────────

    /// Find a project on the current page
    pub fn project_on_page(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Resolve a project from the current page, then from earlier pages
    pub fn find_project(&self, id: &ProjectId) -> Option<&Project> {
        self.project_on_page(id)
            .or_else(|| self.known_projects.get(id))
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.page.selected_project_id.as_ref()?;
        self.project_on_page(id)
    }

    pub fn project_under_cursor(&self) -> Option<&Project> {
        self.projects.get(self.cursor)
    }

    pub fn is_selected(&self, id: &ProjectId) -> bool {
        self.page.selected_project_id.as_ref() == Some(id)
    }

    /// Replace the displayed page and remember its projects
    pub fn replace_projects(&mut self, projects: Vec<Project>) {
        for project in &projects {
            self.known_projects
                .insert(project.id.clone(), project.clone());
        }
        self.projects = projects;
        self.page.selected_project_id = None;
        self.cursor = 0;
    }

    /// Drop the displayed page (empty state)
    pub fn clear_projects(&mut self) {
        self.projects.clear();
        self.page.selected_project_id = None;
        self.cursor = 0;
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.projects.len() {
            self.cursor += 1;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Status banner
    // ─────────────────────────────────────────────────────────

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some(StatusBanner::new(kind, message));
    }

    /// Hide an expired banner; returns true when one was removed
    pub fn expire_status(&mut self, now: Instant) -> bool {
        let timeout = self.settings.ui.status_timeout();
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.is_expired(now, timeout))
        {
            self.status = None;
            return true;
        }
        false
    }

    // ─────────────────────────────────────────────────────────
    // Confirm dialog
    // ─────────────────────────────────────────────────────────

    pub fn show_confirm_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn hide_confirm_dialog(&mut self) -> Option<ConfirmDialogState> {
        self.ui_mode = UiMode::Browse;
        self.confirm_dialog.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn projects(n: usize) -> Vec<Project> {
        (1..=n)
            .map(|i| Project::new(i.to_string(), format!("Project {i}")))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.page.current_page, 1);
        assert_eq!(state.page.page_size, 5);
        assert!(!state.page.is_loading);
        assert!(!state.page.show_pagination());
        assert_eq!(state.ui_mode, UiMode::Browse);
    }

    #[test]
    fn test_replace_projects_clears_selection() {
        let mut state = AppState::new();
        state.replace_projects(projects(3));
        state.page.selected_project_id = Some(ProjectId::from("2"));
        state.cursor = 2;

        state.replace_projects(projects(2));
        assert_eq!(state.page.selected_project_id, None);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.known_projects.len(), 3);
    }

    #[test]
    fn test_find_project_falls_back_to_cache() {
        let mut state = AppState::new();
        state.replace_projects(vec![Project::new("a", "A")]);
        state.replace_projects(vec![Project::new("b", "B")]);

        assert!(state.project_on_page(&ProjectId::from("a")).is_none());
        assert_eq!(
            state.find_project(&ProjectId::from("a")).map(|p| p.name.as_str()),
            Some("A")
        );
    }

    #[test]
    fn test_cursor_bounds() {
        let mut state = AppState::new();
        state.replace_projects(projects(2));

        state.move_cursor_up();
        assert_eq!(state.cursor, 0);
        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_pagination_visibility() {
        let mut page = PageState {
            loaded: true,
            returned: 0,
            ..Default::default()
        };
        assert!(!page.show_pagination());

        page.current_page = 2;
        assert!(page.show_pagination());

        page.load_failed = true;
        assert!(!page.show_pagination());
    }

    #[test]
    fn test_expire_status() {
        let mut state = AppState::new();
        state.set_status(StatusKind::Success, "done");
        let shown = state.status.as_ref().unwrap().shown_at;

        assert!(!state.expire_status(shown + Duration::from_millis(100)));
        assert!(state.expire_status(shown + Duration::from_millis(3000)));
        assert!(state.status.is_none());
    }
}
