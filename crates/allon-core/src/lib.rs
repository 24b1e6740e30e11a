//! # allon-core - Core Domain Types
//!
//! Foundation crate for the Allon project browser. Provides the project
//! model, REST envelopes, pagination rules, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Projects (`project`)
//! - [`Project`] - A configuration project as served by the API
//! - [`ProjectId`] - String-or-number id normalized to a string
//! - [`ProjectStatus`] - Lifecycle status (active, completed, inactive, pending)
//! - [`ConfigItem`] - One device-module entry of a configuration payload
//! - [`format_date()`] - Display formatting for API timestamps
//!
//! ### Envelopes (`envelope`)
//! - [`ProjectsEnvelope`] - `GET /api/projects` response
//! - [`LoadResponse`] - Configuration apply response
//! - [`PaginationMeta`] - Server-supplied page bounds
//!
//! ### Pagination (`pagination`)
//! - [`resolve_bounds()`] - Page bounds from metadata, totals or the full-page heuristic
//! - [`page_links()`] - Page-number affordances
//! - [`PAGE_SIZE`] - Projects per page
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use allon_core::prelude::*;
//! ```

pub mod envelope;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod project;

/// Prelude for common imports used throughout all Allon crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use envelope::{
    LoadResponse, PaginationMeta, ProjectPage, ProjectsEnvelope, GENERIC_APPLY_ERROR,
};
pub use error::{Error, Result, ResultExt};
pub use pagination::{
    has_next_page, page_links, resolve_bounds, PageBounds, PageLink, PaginationSource, PAGE_SIZE,
};
pub use project::{
    format_date, ConfigItem, Project, ProjectId, ProjectStatus, CONFIG_PREVIEW_ITEMS,
};
