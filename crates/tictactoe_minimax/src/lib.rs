//! Tic-tac-toe board model and exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board**: an immutable 3x3 grid that derives whose turn it is, which
//!   squares are open, who has won and what the position is worth
//! - **Rules**: line and full-board checks the board is built on
//! - **Search**: mutually recursive max/min backup over the full game tree
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Action, Board, best_action};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! let action = best_action(&board).expect("game is not over");
//! assert_eq!(action, Action::new(0, 2));
//! assert_eq!(board.apply(action)?.utility(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
pub mod rules;
mod search;
mod types;

pub use action::Action;
pub use board::Board;
pub use error::{BoardError, InvalidAction};
pub use search::{Minimax, ScoredAction, SearchStats, best_action, max_value, min_value};
pub use types::{GameStatus, Player, Square};
