//! allon-tui - Terminal UI for the Allon project browser
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! Engine from allon-app and adds terminal rendering, event polling, and
//! widget display. `snapshot` renders the same view off-screen for the
//! headless runs.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod snapshot;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
pub use snapshot::render_to_string;
