//! Command-line interface for retrace.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Retrace - tic-tac-toe with move history navigation
#[derive(Parser, Debug)]
#[command(name = "retrace")]
#[command(about = "Tic-tac-toe with time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Show the history list newest first
        #[arg(long)]
        desc: bool,
    },

    /// Play a list of cell clicks without a terminal UI and print the result
    Replay {
        /// Cells clicked, in order (0-8, row-major)
        #[arg(value_delimiter = ',', num_args = 0..)]
        moves: Vec<usize>,

        /// Jump to this move number after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Cells clicked after the jump
        #[arg(long, value_delimiter = ',')]
        then: Vec<usize>,

        /// List history newest first
        #[arg(long)]
        desc: bool,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::parse_from([
            "retrace", "replay", "0", "3", "1", "--jump", "1", "--then", "8,7", "--json",
        ]);
        match cli.command {
            Some(Command::Replay {
                moves,
                jump,
                then,
                desc,
                json,
            }) => {
                assert_eq!(moves, vec![0, 3, 1]);
                assert_eq!(jump, Some(1));
                assert_eq!(then, vec![8, 7]);
                assert!(!desc);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["retrace", "--config", "retrace.toml"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("retrace.toml")));
    }
}
