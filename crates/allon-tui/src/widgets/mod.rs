//! Custom widgets for the project browser

mod confirm_dialog;
mod header;
mod key_hints;
pub mod modal_overlay;
mod pagination_bar;
mod project_list;
mod status_line;

pub use confirm_dialog::ConfirmDialog;
pub use header::{spinner_frame, MainHeader};
pub use key_hints::KeyHints;
pub use pagination_bar::PaginationBar;
pub use project_list::{config_preview, ProjectList};
pub use status_line::StatusLine;

// Re-export state from app layer
pub use allon_app::confirm_dialog::ConfirmDialogState;
