//! tabcalc - tab switcher and four-function calculator for the terminal
//!
//! The calculator engine and navigation live in `core`; the ratatui frontend
//! only renders state and reports clicks and keys.

mod clipboard;
mod config;
mod core;
mod data;
mod frontend;

use anyhow::Result;
use clap::Parser as ClapParser;
use frontend::{Frontend, FrontendEvent};
use std::path::PathBuf;
use std::time::Duration;

#[derive(ClapParser)]
#[command(name = "tabcalc")]
#[command(about = "Tab switcher with a four-function calculator", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.tabcalc)
    /// Can also be set via TABCALC_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Section to show at startup (overrides navigation.default_section)
    #[arg(short, long, value_name = "ID")]
    section: Option<String>,
}

fn init_logging() -> Result<()> {
    // TUI apps can't log to stdout, so we write to a file
    // (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    let log_path = config::Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set custom data directory before anything resolves paths
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, data_dir);
    }

    init_logging()?;
    if let Some(data_dir) = &cli.data_dir {
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DATA_DIR_ENV) {
        tracing::info!("Using data directory from {}: {}", config::DATA_DIR_ENV, env_dir);
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()?
    };
    if let Some(section) = cli.section {
        config.navigation.default_section = Some(section);
    }

    run_tui(config)
}

/// TUI main loop
fn run_tui(config: config::Config) -> Result<()> {
    use crate::core::AppCore;
    use crossterm::event::KeyEvent;
    use frontend::TuiFrontend;

    let poll_timeout = Duration::from_millis(config.ui.poll_timeout_ms);
    let mut app_core = AppCore::new(config);

    let mut frontend = TuiFrontend::new()?;
    frontend.set_poll_timeout(poll_timeout);
    let (width, height) = frontend.size();
    tracing::info!("Started TUI ({}x{})", width, height);

    while app_core.running {
        frontend.render(&app_core)?;

        for event in frontend.poll_events()? {
            if let Some((x, y)) = event.left_click() {
                let target = frontend.hit_test(x, y);
                tracing::trace!("Click at ({}, {}) -> {:?}", x, y, target);
                app_core.activate_target(target);
                continue;
            }

            match event {
                FrontendEvent::Key { code, modifiers } => {
                    app_core.handle_key(KeyEvent::new(code, modifiers));
                }
                FrontendEvent::Resize { width, height } => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                }
                FrontendEvent::Mouse { .. } => {}
            }

            if !app_core.running {
                break;
            }
        }
    }

    frontend.cleanup()?;
    tracing::info!("Exited cleanly");
    Ok(())
}
