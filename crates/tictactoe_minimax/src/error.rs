//! Error types for the board model.

use crate::Action;

/// Error raised when an action cannot be applied to a board.
///
/// This is the only failure of the game core. Callers that collect moves
/// from a person are expected to catch it and ask again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAction {
    /// The coordinate lies outside the 3x3 grid.
    #[display("Action {} is off the board", _0)]
    OutOfRange(Action),

    /// The square at the coordinate is already marked.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Action),

    /// The board is terminal, so no action is legal.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidAction {}

/// Error raised when building a board from rows, text or serialized squares.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The input did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    BadLength(usize),

    /// The input contained a character that is not a square symbol.
    #[display("Unrecognized square symbol {:?}", _0)]
    BadSymbol(char),

    /// The mark counts cannot come from alternating play starting with X.
    #[display("Unbalanced marks: {} X and {} O", x, o)]
    UnbalancedMarks {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for BoardError {}
