//! The 3x3 board and the queries the search engine asks of it.
//!
//! A [`Board`] is a small `Copy` value. Every transition returns a new
//! board, so sibling branches of the search never share state.

use crate::rules::{check_winner, is_full};
use crate::{Action, BoardError, GameStatus, InvalidAction, Player, Square};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// Invariant: X moves first and players alternate, so the number of X marks
/// is either equal to or one more than the number of O marks. Every
/// constructor enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Square; 9]", into = "[Square; 9]")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// The starting position: every square empty.
    pub fn initial_state() -> Self {
        Self::new()
    }

    /// Builds a board from three rows of squares, top row first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnbalancedMarks`] if the marks could not have
    /// been produced by alternating play starting with X.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Result<Self, BoardError> {
        let mut squares = [Square::Empty; 9];
        for (i, square) in rows.iter().flatten().enumerate() {
            squares[i] = *square;
        }
        Self::try_from(squares)
    }

    /// Gets the square at the given action, or `None` if it is off the board.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|i| self.squares[i])
    }

    /// Checks if the square at `action` is on the board and empty.
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Some(Square::Empty)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// The player whose mark goes down next, ignoring whether the game is over.
    fn to_move(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the player who moves next, or `None` on a terminal board.
    ///
    /// Derived purely from mark counts: equal counts mean X to move.
    pub fn current_player(&self) -> Option<Player> {
        (!self.is_terminal()).then(|| self.to_move())
    }

    /// Returns every empty coordinate, or `None` when the board is full.
    ///
    /// The set iterates in row-major order. A board that already has a
    /// winner still reports its empty squares here; use
    /// [`Board::is_terminal`] to decide whether play may continue.
    pub fn legal_actions(&self) -> Option<BTreeSet<Action>> {
        let actions: BTreeSet<Action> = Action::ALL
            .into_iter()
            .filter(|&action| self.is_empty(action))
            .collect();
        (!actions.is_empty()).then_some(actions)
    }

    /// Returns the board that results from the current player marking `action`.
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// - [`InvalidAction::GameOver`] if the board is terminal
    /// - [`InvalidAction::OutOfRange`] if the coordinate is off the board
    /// - [`InvalidAction::SquareOccupied`] if the square is already marked
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&self, action: Action) -> Result<Board, InvalidAction> {
        if self.is_terminal() {
            return Err(InvalidAction::GameOver);
        }
        let index = action.index().ok_or(InvalidAction::OutOfRange(action))?;
        if self.squares[index] != Square::Empty {
            return Err(InvalidAction::SquareOccupied(action));
        }

        let player = self.to_move();
        trace!(%player, "Placing mark");
        Ok(self.with_mark(index, player))
    }

    /// Copy of this board with `player` written at `index`.
    fn with_mark(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.squares[index] = Square::Occupied(player);
        next
    }

    /// Every legal action paired with the board it produces, row-major.
    ///
    /// Empty for terminal boards.
    pub(crate) fn successors(&self) -> impl Iterator<Item = (Action, Board)> + '_ {
        let player = (!self.is_terminal()).then(|| self.to_move());
        Action::ALL.into_iter().filter_map(move |action| {
            let player = player?;
            let index = action.index()?;
            (self.squares[index] == Square::Empty)
                .then(|| (action, self.with_mark(index, player)))
        })
    }

    /// Returns the player owning a complete line, X checked first.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }

    /// True if the board is full or someone has completed a line.
    pub fn is_terminal(&self) -> bool {
        is_full(self) || self.winner().is_some()
    }

    /// +1 if X has a line, -1 if O has a line, 0 otherwise.
    ///
    /// Only meaningful on terminal boards, but total.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Summarizes the board as in progress, won or drawn.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if is_full(self) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Rows of the board, top first.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[Square; 9]> for Board {
    type Error = BoardError;

    fn try_from(squares: [Square; 9]) -> Result<Self, Self::Error> {
        let board = Self { squares };
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        if x == o || x == o + 1 {
            Ok(board)
        } else {
            Err(BoardError::UnbalancedMarks { x, o })
        }
    }
}

impl From<Board> for [Square; 9] {
    fn from(board: Board) -> Self {
        board.squares
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine square symbols (`X`, `O`, `.` or `_`), ignoring
    /// whitespace and the separators `|`, `/`, `-` and `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|&c| !c.is_whitespace() && !matches!(c, '|' | '/' | '-' | '+'))
            .map(|c| Square::from_symbol(c).ok_or(BoardError::BadSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;
        let len = squares.len();
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| BoardError::BadLength(len))?;
        Self::try_from(squares)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().into_iter().enumerate() {
            let [a, b, c] = row.map(Square::symbol);
            write!(f, "{}|{}|{}", a, b, c)?;
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
