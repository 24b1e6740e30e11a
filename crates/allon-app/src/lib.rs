//! allon-app - Application state and orchestration for the Allon project browser
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine abstraction shared by the TUI and the headless
//! driver, and configuration loading.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod status;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, PageState, UiMode};
pub use status::{StatusBanner, StatusKind};

// Re-export API types for frontends
pub use allon_api::{ApplyMode, HttpProjectsApi, ProjectsApi};
