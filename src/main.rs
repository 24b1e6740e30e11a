//! Allon - terminal browser for ESPAllOn configuration projects
//!
//! This is the binary entry point. It parses flags, loads `.allon/config.toml`
//! and starts either the TUI or headless mode on a shared Engine.

mod headless;

use std::path::PathBuf;

use allon_app::config::{self, IconMode, Settings};
use allon_app::{ApplyMode, Engine, HttpProjectsApi};
use allon_core::prelude::*;
use clap::{Parser, ValueEnum};

/// Allon - browse configuration projects and apply one to the device
#[derive(Parser, Debug)]
#[command(name = "allon")]
#[command(about = "Browse ESPAllOn configuration projects and apply one to the device", long_about = None)]
struct Args {
    /// Root of the device API, e.g. http://192.168.4.1
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Apply through POST /api/project/{id}/load (older firmware)
    #[arg(long)]
    legacy_apply: bool,

    /// Status icon set
    #[arg(long, value_enum)]
    icons: Option<IconArg>,

    /// Run the scripted browse-and-apply scenario without a TUI (NDJSON output)
    #[arg(long)]
    headless: bool,

    /// Folder for headless screen snapshots
    #[arg(long, value_name = "DIR")]
    snapshots: Option<PathBuf>,

    /// Do not write a snapshot at the end of a headless run
    #[arg(long)]
    no_snapshot: bool,

    /// Write a commented .allon/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IconArg {
    Emoji,
    Unicode,
}

impl From<IconArg> for IconMode {
    fn from(arg: IconArg) -> Self {
        match arg {
            IconArg::Emoji => IconMode::Emoji,
            IconArg::Unicode => IconMode::Unicode,
        }
    }
}

impl Args {
    /// Flags win over file values
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
        if self.legacy_apply {
            settings.api.apply_mode = ApplyMode::ProjectLoad;
        }
        if let Some(icons) = self.icons {
            settings.ui.icons = icons.into();
        }
        if let Some(folder) = &self.snapshots {
            settings.headless.snapshots_folder = folder.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, stdout belongs to the TUI or the NDJSON report
    allon_core::logging::init()?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        config::init_config_dir(&cwd)?;
        eprintln!("Wrote {}", cwd.join(".allon").join("config.toml").display());
        return Ok(());
    }

    let mut settings = config::load_settings(&cwd);
    args.apply_overrides(&mut settings);

    info!("API: {} ({})", settings.api.base_url, settings.api.apply_mode);

    let api = match HttpProjectsApi::new(&settings.api.base_url, settings.api.apply_mode) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Pass the device address with --api-url, e.g. --api-url http://192.168.4.1");
            std::process::exit(2);
        }
    };

    let engine = Engine::new(settings, api);

    if args.headless {
        let options = headless::HeadlessOptions {
            snapshots_folder: (!args.no_snapshot)
                .then(|| engine.settings.headless.snapshots_folder.clone()),
        };
        let outcome = headless::run_headless(engine, options).await?;
        info!("Allon headless run finished: {:?}", outcome);
        if !outcome.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = allon_tui::run(engine).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(log_file) = allon_core::logging::get_current_log_file() {
            eprintln!("Details in {}", log_file.display());
        }
    }

    info!("Allon exiting");
    result
}
