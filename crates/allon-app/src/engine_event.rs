//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. Headless mode turns them into its NDJSON
//! report.

use allon_core::ProjectId;

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Pages
    // ─────────────────────────────────────────────────────────
    /// A page fetch was issued
    PageRequested { page: u32 },

    /// A page finished loading
    PageLoaded {
        page: u32,
        count: usize,
        total_pages: u32,
        total_projects: u64,
        has_next: bool,
    },

    /// A page fetch failed
    PageLoadFailed { page: u32, error: String },

    // ─────────────────────────────────────────────────────────
    // Selection & Configuration
    // ─────────────────────────────────────────────────────────
    /// The selected project changed
    ProjectSelected { id: ProjectId, name: String },

    /// The confirm dialog opened for a project
    ConfirmRequested { id: ProjectId },

    /// A configuration submission was issued
    ConfigSubmitted { id: ProjectId },

    /// The device accepted a configuration
    ConfigApplied { id: ProjectId, message: String },

    /// A configuration submission failed
    ConfigApplyFailed { id: ProjectId, error: String },

    /// Status banner changed (loading, success or error text)
    Status { message: String },

    /// Engine is shutting down
    Shutdown,
}
