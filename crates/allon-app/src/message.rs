//! Message types for the application (TEA pattern)

use allon_core::{ProjectId, ProjectPage};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (status banner expiry)
    Tick,

    /// Quit the browser (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Fetch & Pagination
    // ─────────────────────────────────────────────────────────
    /// Fetch a page; ignored while another fetch is in flight
    LoadPage { page: u32, show_spinner: bool },

    /// Navigate to a page without the loading banner
    GoToPage(u32),

    PreviousPage,

    NextPage,

    /// Re-fetch the current page
    Refresh,

    /// A page fetch completed
    PageLoaded { page: u32, result: ProjectPage },

    /// A page fetch failed (transport, status, or envelope error)
    PageLoadFailed { page: u32, error: String },

    // ─────────────────────────────────────────────────────────
    // Cursor
    // ─────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,

    // ─────────────────────────────────────────────────────────
    // Selection & Configuration Submission
    // ─────────────────────────────────────────────────────────
    /// Mark a project of the current page as selected
    SelectProject(ProjectId),

    /// Ask to apply a project's configuration (opens the confirm dialog)
    LoadProject(ProjectId),

    /// `LoadProject` for the currently selected project
    LoadSelectedProject,

    /// Confirm dialog accepted
    ConfirmLoad,

    /// Confirm dialog dismissed
    CancelLoad,

    /// The device accepted the configuration
    ConfigApplied {
        id: ProjectId,
        message: Option<String>,
    },

    /// Applying the configuration failed
    ConfigApplyFailed { id: ProjectId, error: String },
}
