//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_minimax::{Board, Player};

/// Tic-tac-toe - optimal play by exhaustive minimax search
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play or analyze tic-tac-toe with a perfect minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal action for a board
    Best {
        /// Board as nine symbols (X, O, .), e.g. "XX./OO./..."
        #[arg(short, long)]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the minimax value of every legal action
    Analyze {
        /// Board as nine symbols (X, O, .), e.g. "XX./OO./..."
        #[arg(short, long)]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from the empty board
    Selfplay {
        /// Search without the transposition table
        #[arg(long)]
        no_table: bool,
    },

    /// Play against the engine on stdin/stdout
    Play {
        /// Which mark you play (X moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Search without the transposition table
        #[arg(long)]
        no_table: bool,

        /// Show the value of every candidate before each engine move
        #[arg(long)]
        show_scores: bool,
    },
}
