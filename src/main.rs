//! taskpro - A terminal client for a REST task-management backend.
//!
//! This is the main binary that loads configuration, sets up file logging
//! and launches the TUI application.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use taskpro_api::TaskClient;
use taskpro_config::{Config, ENV_API_URL, ENV_LOG_FILE};
use taskpro_tui::{App, terminal};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a tracing filter directive.
const ENV_LOG: &str = "TASKPRO_LOG";

#[derive(Parser, Debug)]
#[command(name = "taskpro", version, about = "Manage your tasks from the terminal")]
struct Cli {
    /// Base URL of the task backend.
    #[arg(long, env = ENV_API_URL)]
    api_url: Option<String>,

    /// Configuration file to read instead of searching the default locations.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// File to write logs to.
    #[arg(long, env = ENV_LOG_FILE, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Write the effective configuration to PATH as JSON and exit.
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

impl Cli {
    /// Loads the configuration and layers the command line on top.
    fn config(&self) -> anyhow::Result<Config> {
        let mut config =
            Config::load_with(self.config.as_deref()).context("failed to load configuration")?;
        if let Some(url) = &self.api_url {
            config.api.base_url.clone_from(url);
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

/// Sends logs to `path`. The terminal belongs to the UI.
fn init_logging(path: &Path, level: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    if let Some(path) = &cli.save_config {
        config
            .save_to(path)
            .with_context(|| format!("failed to save configuration to {}", path.display()))?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let log_file = config.logging.log_file()?;
    init_logging(&log_file, config.logging.level.trim())?;

    let client = TaskClient::new(config.api.base_url.as_str())?;
    info!(base_url = %client.base_url(), "starting taskpro");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;
    let result = App::new().run(&mut terminal, client).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
