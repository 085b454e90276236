//! Actions: the coordinates a player may mark.
//!
//! An action is just a `(row, col)` pair. It carries no player and no board;
//! whether it is legal is decided by the board it is applied to.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` coordinate on the board.
///
/// Coordinates are not range-checked on construction so that callers can
/// probe legality through [`Board::apply`](crate::Board::apply). The derived
/// ordering is row-major, which is the order the search engine uses to break
/// ties between equally valued moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Action {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Action {
    /// All nine on-board actions in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Creates an action for the given coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row of this action.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this action.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major square index (0-8), or `None` for off-board coordinates.
    pub fn index(&self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }

    /// Creates an action from a row-major square index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label for on-board actions.
    pub fn label(&self) -> Option<&'static str> {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        self.index().map(|i| LABELS[i])
    }

    /// Parses user input as an action.
    ///
    /// Accepts `"row col"`, `"row,col"` or a square label such as
    /// `"center"` or `"top-left"` (case-insensitive). Parsed coordinates
    /// may be off the board; applying them reports the problem.
    #[instrument]
    pub fn parse_input(s: &str) -> Option<Action> {
        let s = s.trim();
        let coords: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if let [row, col] = coords.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Some(Action::new(row, col));
        }

        let wanted = s.to_lowercase().replace(' ', "-");
        Self::ALL.into_iter().find(|action| {
            action
                .label()
                .is_some_and(|label| label.to_lowercase() == wanted)
        })
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
