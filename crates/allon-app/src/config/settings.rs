//! Settings parser for .allon/config.toml

use std::path::Path;

use allon_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const ALLON_DIR: &str = ".allon";

/// Load settings from `.allon/config.toml` under `project_path`
///
/// A missing or unreadable file yields the defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(ALLON_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in `.allon/`
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let allon_dir = project_path.join(ALLON_DIR);

    if !allon_dir.exists() {
        std::fs::create_dir_all(&allon_dir)
            .map_err(|e| Error::config(format!("Failed to create .allon dir: {}", e)))?;
    }

    let config_path = allon_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Allon Project Browser Configuration

[api]
base_url = "http://192.168.4.1"
# "config_load" posts the whole project to /api/config/load
# "project_load" posts to /api/project/{id}/load (older firmware)
apply_mode = "config_load"

[ui]
status_timeout_ms = 3000
icons = "emoji"          # or "unicode"

[headless]
snapshots_folder = "screenshots"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
