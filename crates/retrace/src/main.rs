//! Retrace - tic-tac-toe with time travel.
//!
//! `retrace` (or `retrace play`) opens the terminal UI. `retrace replay`
//! applies a list of moves and prints the resulting view.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod replay;
mod settings;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use retrace_tictactoe::Game;
use settings::Settings;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            descending,
            log_file,
        } => {
            settings.apply_overrides(descending, log_file);
            init_file_logging(&settings)?;
            info!(sort = ?settings.sort(), "Starting game");
            tui::run_tui(Game::with_order(*settings.sort()))
        }
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            settings.apply_overrides(descending, None);
            init_stderr_logging(&settings);
            let output = replay::run_replay(&moves, jump, *settings.sort(), json)?;
            println!("{}", output);
            Ok(())
        }
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn init_stderr_logging(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();
}
