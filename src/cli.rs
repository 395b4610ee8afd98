//! Command-line interface for tictactoe_duel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_duel::GameMode;

/// Tic-tac-toe for two players or against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Two-mode tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML engine config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Skip mode selection (two-player or computer)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Seed for the computer's moves
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Reject moves onto occupied cells
        #[arg(long)]
        strict: bool,
    },

    /// Apply a fixed list of moves and print the final state as JSON
    Replay {
        /// Cell indices (0-8), comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Name of player 1 (X)
        #[arg(long)]
        first: Option<String>,

        /// Name of player 2 (O)
        #[arg(long)]
        second: Option<String>,

        /// Reject moves onto occupied cells
        #[arg(long)]
        strict: bool,
    },
}
