//! Command-line interface for retrace.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Retrace - tic-tac-toe with a replayable move history
#[derive(Parser, Debug)]
#[command(name = "retrace")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (defaults to ./retrace.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// List moves latest first
        #[arg(long)]
        descending: bool,

        /// Write logs to this file instead of the configured one
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply moves without a UI and print the resulting view
    Replay {
        /// Cell indices (0-8, row-major) in play order
        moves: Vec<usize>,

        /// Step to jump to after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves latest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            descending: false,
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::parse_from(["retrace"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::parse_from([
            "retrace", "--config", "alt.toml", "replay", "0", "1", "4", "--jump", "2", "--json",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 1, 4],
                jump: Some(2),
                descending: false,
                json: true,
            })
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
