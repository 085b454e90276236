//! Tic-tac-toe - terminal front end for the minimax engine.

#![warn(missing_docs)]

mod cli;
mod config;
mod game_loop;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use serde_json::json;
use std::io::{self, Write};
use tictactoe_minimax::{Board, Minimax};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Best { board, json } => run_best(&board, json),
        Command::Analyze { board, json } => run_analyze(&board, json),
        Command::Selfplay { no_table } => {
            run_selfplay(config.with_overrides(None, no_table, false))
        }
        Command::Play {
            human,
            no_table,
            show_scores,
        } => run_play(config.with_overrides(human, no_table, show_scores)),
    }
}

/// Installs the stderr subscriber, preferring `RUST_LOG` over the config.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

fn engine_for(config: &PlayConfig) -> Minimax {
    if *config.transposition_table() {
        Minimax::with_transposition_table()
    } else {
        Minimax::new()
    }
}

/// Print the optimal action for a board
#[instrument(skip(board))]
fn run_best(board: &Board, json: bool) -> Result<()> {
    let mut engine = Minimax::new();
    let action = engine.best_action(board);
    info!(?action, stats = ?engine.stats(), "Best action computed");

    let mut out = io::stdout().lock();
    if json {
        let body = json!({
            "board": board,
            "to_move": board.current_player(),
            "action": action,
            "stats": engine.stats(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else {
        match action {
            Some(action) => writeln!(out, "{}", action)?,
            None => writeln!(out, "none ({})", board.status())?,
        }
    }
    Ok(())
}

/// Print every legal action with its minimax value
#[instrument(skip(board))]
fn run_analyze(board: &Board, json: bool) -> Result<()> {
    let mut engine = Minimax::new();
    let scored = engine.score_actions(board);

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&scored)?)?;
        return Ok(());
    }

    writeln!(out, "{}\n", board)?;
    match board.current_player() {
        Some(player) => writeln!(out, "{} to move", player)?,
        None => writeln!(out, "{}", board.status())?,
    }
    for s in &scored {
        writeln!(out, "  {}  value {:>2}", s.action, s.value)?;
    }
    Ok(())
}

/// Let the engine play both sides
fn run_selfplay(config: PlayConfig) -> Result<()> {
    let mut engine = engine_for(&config);
    let mut out = io::stdout().lock();
    game_loop::self_play(&mut out, &mut engine)?;
    Ok(())
}

/// Play against the engine on stdin/stdout
fn run_play(config: PlayConfig) -> Result<()> {
    info!(human = %config.human(), "Starting interactive game");
    let mut engine = engine_for(&config);
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    game_loop::play(&mut input, &mut out, &config, &mut engine)?;
    Ok(())
}
