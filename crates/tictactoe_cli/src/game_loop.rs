//! Game loops that drive the engine from a terminal.
//!
//! Both loops only talk to the library through `apply` and `best_action`,
//! and are generic over their I/O so tests can script them.

use crate::config::PlayConfig;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictactoe_minimax::{Action, Board, GameStatus, Minimax, Player};
use tracing::{debug, info, instrument, warn};

/// Formats an action with its square label, e.g. `(1, 1) Center`.
fn describe(action: Action) -> String {
    match action.label() {
        Some(label) => format!("{} {}", action, label),
        None => action.to_string(),
    }
}

/// Asks the engine for a move and applies it.
fn engine_move<W: Write>(
    out: &mut W,
    board: &Board,
    engine: &mut Minimax,
    show_scores: bool,
) -> Result<Option<Board>> {
    let Some(player) = board.current_player() else {
        return Ok(None);
    };
    if show_scores {
        for scored in engine.score_actions(board) {
            writeln!(out, "  {:<22} value {:>2}", describe(scored.action), scored.value)?;
        }
    }
    let Some(action) = engine.best_action(board) else {
        return Ok(None);
    };
    debug!(%player, %action, stats = ?engine.stats(), "Engine moved");
    writeln!(out, "Engine ({}) plays {}", player, describe(action))?;
    Ok(Some(board.apply(action)?))
}

/// Plays the engine against itself from the empty board.
///
/// Prints every position and returns the final board.
#[instrument(skip_all)]
pub fn self_play<W: Write>(out: &mut W, engine: &mut Minimax) -> Result<Board> {
    let mut board = Board::initial_state();
    writeln!(out, "{}\n", board)?;
    while let Some(next) = engine_move(out, &board, engine, false)? {
        board = next;
        writeln!(out, "{}\n", board)?;
    }
    info!(status = %board.status(), nodes = engine.stats().nodes, "Self-play finished");
    writeln!(out, "Result: {}", board.status())?;
    Ok(board)
}

/// Plays an interactive game: the human enters moves on `input`, the engine
/// answers for the other side.
///
/// Unreadable or illegal moves are reported and asked for again.
///
/// # Errors
///
/// Fails if `input` closes before the game is over or on I/O errors.
#[instrument(skip_all, fields(human = %config.human()))]
pub fn play<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &PlayConfig,
    engine: &mut Minimax,
) -> Result<GameStatus> {
    let human: Player = *config.human();
    let mut board = Board::initial_state();
    writeln!(out, "You are {}. Enter moves as \"row col\" (0-2) or a square name.", human)?;

    while !board.is_terminal() {
        writeln!(out, "\n{}\n", board)?;
        if board.current_player() != Some(human) {
            if let Some(next) = engine_move(out, &board, engine, *config.show_scores())? {
                board = next;
            }
            continue;
        }

        write!(out, "Your move: ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game finished");
        }

        let Some(action) = Action::parse_input(&line) else {
            writeln!(out, "Could not read {:?} as a move", line.trim())?;
            continue;
        };
        match board.apply(action) {
            Ok(next) => board = next,
            Err(e) => {
                warn!(%action, error = %e, "Rejected move");
                writeln!(out, "{}", e)?;
            }
        }
    }

    let status = board.status();
    writeln!(out, "\n{}\n\nResult: {}", board, status)?;
    info!(%status, "Game finished");
    Ok(status)
}
