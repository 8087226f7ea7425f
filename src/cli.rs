//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// noughts - two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Ignore mouse clicks
        #[arg(long)]
        no_mouse: bool,
    },

    /// Apply a list of clicks to a new game and print the result
    Replay {
        /// Cell indices 0-8 or labels like `center`, separated by commas or spaces
        moves: String,

        /// Print the game snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a board written as text, e.g. "XOX/OXO/OXO"
    Eval {
        /// Nine cells in row-major order; '.', '-', '_' or digits are empty
        board: String,
    },
}
