//! Headless mode - scripted run with JSON event output
//!
//! Runs one browse-and-apply scenario against the device API without a TUI
//! and reports it as NDJSON (newline-delimited JSON) on stdout, one event
//! per line. Each event has an "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"started","base_url":"http://192.168.4.1","apply_mode":"config_load","timestamp":1704700001000}
//! {"event":"page_loaded","page":1,"count":5,"total_pages":2,"total_projects":5,"has_next":true,"timestamp":1704700001200}
//! {"event":"config_applied","id":"3","message":"Configuration applied","timestamp":1704700002000}
//! ```

pub mod runner;

pub use runner::{run_headless, HeadlessOptions, ScenarioOutcome};

use std::io::{self, Write};
use std::path::Path;

use allon_app::{ApplyMode, EngineEvent};
use chrono::Utc;
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Run started
    Started {
        base_url: String,
        apply_mode: ApplyMode,
        timestamp: i64,
    },

    /// A scenario step is about to run
    Step { name: String, timestamp: i64 },

    PageRequested { page: u32, timestamp: i64 },

    PageLoaded {
        page: u32,
        count: usize,
        total_pages: u32,
        total_projects: u64,
        has_next: bool,
        timestamp: i64,
    },

    PageLoadFailed {
        page: u32,
        error: String,
        timestamp: i64,
    },

    ProjectSelected {
        id: String,
        name: String,
        timestamp: i64,
    },

    ConfirmRequested { id: String, timestamp: i64 },

    ConfigSubmitted { id: String, timestamp: i64 },

    ConfigApplied {
        id: String,
        message: String,
        timestamp: i64,
    },

    ConfigApplyFailed {
        id: String,
        error: String,
        timestamp: i64,
    },

    /// Status banner text
    Status { message: String, timestamp: i64 },

    /// Final screen written to disk
    Snapshot { path: String, timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    /// Run finished
    Finished {
        outcome: ScenarioOutcome,
        success: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // NDJSON: one event per line
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn started(base_url: &str, apply_mode: ApplyMode) -> Self {
        Self::Started {
            base_url: base_url.to_string(),
            apply_mode,
            timestamp: Self::now(),
        }
    }

    pub fn step(name: &str) -> Self {
        Self::Step {
            name: name.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn snapshot(path: &Path) -> Self {
        Self::Snapshot {
            path: path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn finished(outcome: ScenarioOutcome) -> Self {
        Self::Finished {
            outcome,
            success: outcome.is_success(),
            timestamp: Self::now(),
        }
    }

    /// Report line for an engine event; `Shutdown` has none
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let event = match event {
            EngineEvent::PageRequested { page } => Self::PageRequested {
                page: *page,
                timestamp,
            },
            EngineEvent::PageLoaded {
                page,
                count,
                total_pages,
                total_projects,
                has_next,
            } => Self::PageLoaded {
                page: *page,
                count: *count,
                total_pages: *total_pages,
                total_projects: *total_projects,
                has_next: *has_next,
                timestamp,
            },
            EngineEvent::PageLoadFailed { page, error } => Self::PageLoadFailed {
                page: *page,
                error: error.clone(),
                timestamp,
            },
            EngineEvent::ProjectSelected { id, name } => Self::ProjectSelected {
                id: id.to_string(),
                name: name.clone(),
                timestamp,
            },
            EngineEvent::ConfirmRequested { id } => Self::ConfirmRequested {
                id: id.to_string(),
                timestamp,
            },
            EngineEvent::ConfigSubmitted { id } => Self::ConfigSubmitted {
                id: id.to_string(),
                timestamp,
            },
            EngineEvent::ConfigApplied { id, message } => Self::ConfigApplied {
                id: id.to_string(),
                message: message.clone(),
                timestamp,
            },
            EngineEvent::ConfigApplyFailed { id, error } => Self::ConfigApplyFailed {
                id: id.to_string(),
                error: error.clone(),
                timestamp,
            },
            EngineEvent::Status { message } => Self::Status {
                message: message.clone(),
                timestamp,
            },
            EngineEvent::Shutdown => return None,
        };
        Some(event)
    }
}
