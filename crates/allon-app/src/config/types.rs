//! Configuration types for the Allon project browser
//!
//! Defines `Settings` (`.allon/config.toml`) and its sections.

use std::path::PathBuf;
use std::time::Duration;

use allon_api::ApplyMode;
use serde::{Deserialize, Serialize};

/// Application settings (.allon/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub headless: HeadlessSettings,
}

/// Projects API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Root of the device's REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// "config_load" (POST the whole project) or "project_load" (POST by id)
    #[serde(default)]
    pub apply_mode: ApplyMode,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            apply_mode: ApplyMode::default(),
        }
    }
}

fn default_base_url() -> String {
    // Address of the device in access-point mode
    "http://192.168.4.1".to_string()
}

/// Icon set for status badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Emoji badges (🟢 ✅ 🔴 🟡)
    #[default]
    Emoji,
    /// Plain Unicode glyphs that render in every terminal
    Unicode,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Emoji => write!(f, "emoji"),
            IconMode::Unicode => write!(f, "unicode"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long success and error banners stay visible
    #[serde(default = "default_status_timeout_ms")]
    pub status_timeout_ms: u64,

    /// Icon mode: "emoji" (default) or "unicode"
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            status_timeout_ms: default_status_timeout_ms(),
            icons: IconMode::default(),
        }
    }
}

impl UiSettings {
    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.status_timeout_ms)
    }
}

fn default_status_timeout_ms() -> u64 {
    3000
}

/// Headless run settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeadlessSettings {
    /// Where final screen snapshots are written
    #[serde(default = "default_snapshots_folder")]
    pub snapshots_folder: PathBuf,
}

impl Default for HeadlessSettings {
    fn default() -> Self {
        Self {
            snapshots_folder: default_snapshots_folder(),
        }
    }
}

fn default_snapshots_folder() -> PathBuf {
    PathBuf::from("screenshots")
}
