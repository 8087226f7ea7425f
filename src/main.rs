//! noughts - unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{Config, logging, replay, tui};
use tracing::{debug, info, instrument};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    if !matches!(cli.command, Command::Play { .. }) {
        logging::init_stderr(&config);
        debug!(path = %cli.config.display(), ?config, "Config loaded");
    }

    match cli.command {
        Command::Play { no_mouse } => {
            let config = if no_mouse {
                config.without_mouse()
            } else {
                config
            };
            tui::run(config)
        }
        Command::Replay { moves, json } => run_replay(&moves, json),
        Command::Eval { board } => run_eval(&board),
    }
}

#[instrument]
fn run_replay(moves: &str, json: bool) -> Result<()> {
    let moves = replay::parse_moves(moves)?;
    info!(count = moves.len(), "Replaying moves");
    replay::replay(&moves, json, &mut std::io::stdout().lock())
}

#[instrument]
fn run_eval(board: &str) -> Result<()> {
    replay::evaluate_board(board, &mut std::io::stdout().lock())
}
