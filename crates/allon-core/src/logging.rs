//! Logging configuration using tracing

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "ALLON_LOG";

/// Filter used when `ALLON_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str =
    "allon=info,allon_core=info,allon_api=info,allon_app=info,allon_tui=info,warn";

const LOG_FILE_PREFIX: &str = "allon.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/allon/logs/` because stdout belongs to
/// the terminal UI. Log level is controlled by the `ALLON_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// ALLON_LOG=debug allon
/// ALLON_LOG=allon_app=trace allon --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Allon project browser starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("allon").join("logs"))
}

/// Get the log file path for the current day
///
/// The daily appender suffixes the file with the UTC date.
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(log_file_name(Utc::now().date_naive())))
}

fn log_file_name(date: NaiveDate) -> String {
    format!("{LOG_FILE_PREFIX}.{}", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_has_date_suffix() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(log_file_name(date), "allon.log.2024-03-07");
    }

    #[test]
    fn test_current_log_file_is_dated() {
        let path = get_current_log_file().unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("allon.log."));
        assert_eq!(name.len(), "allon.log.YYYY-MM-DD".len());
    }

    #[test]
    fn test_default_filter_covers_every_crate() {
        for target in ["allon=", "allon_core=", "allon_api=", "allon_app=", "allon_tui="] {
            assert!(DEFAULT_FILTER.contains(target), "missing {target}");
        }
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
