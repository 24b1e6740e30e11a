//! Configuration file parsing for the Allon project browser
//!
//! Supports `.allon/config.toml` in the working directory; command-line
//! flags are applied on top by the binary.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings};
pub use types::*;
