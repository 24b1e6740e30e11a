//! Centralized theme for the project browser.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Status badges with emoji and plain Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;
