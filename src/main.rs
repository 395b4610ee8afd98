//! Tic-tac-toe duel - terminal front end
//!
//! Plays interactively or replays a fixed move list.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_duel::{EngineConfig, GameEngine, MoveValidation, Seat};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Play {
            mode,
            seed,
            delay_ms,
            strict,
        } => {
            let mut config = config;
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_computer_delay_ms(delay_ms);
            }
            if strict {
                config = config.with_move_validation(MoveValidation::Strict);
            }
            terminal::run(config, mode).await
        }
        Command::Replay {
            moves,
            first,
            second,
            strict,
        } => {
            let config = if strict {
                config.with_move_validation(MoveValidation::Strict)
            } else {
                config
            };
            run_replay(config, &moves, first, second)
        }
    }
}

/// Applies `moves` in order and prints the resulting snapshot as JSON.
#[instrument(skip(config, first, second))]
fn run_replay(
    config: EngineConfig,
    moves: &[usize],
    first: Option<String>,
    second: Option<String>,
) -> Result<()> {
    let first = Seat::human(first.unwrap_or_else(|| config.player_one_name().clone()));
    let second = Seat::human(second.unwrap_or_else(|| config.player_two_name().clone()));

    let mut game = GameEngine::new(config);
    game.start_game(first, second);
    info!(count = moves.len(), "Replaying moves");

    for &index in moves {
        let outcome = game.play_turn(index)?;
        debug!(index, ?outcome, "Replayed move");
    }

    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}
