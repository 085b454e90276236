//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. [`Minimax::max_value`] and
//! [`Minimax::min_value`] recurse into each other until every branch reaches
//! a terminal board, then back the utilities up. There is no pruning and no
//! depth limit; the 3x3 board bounds the recursion at nine plies.
//!
//! Ties between equally valued moves go to the first action in row-major
//! order.

use crate::{Action, Board, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Which backup a cached value was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Side {
    Max,
    Min,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions evaluated, including the root of each query.
    pub nodes: u64,
    /// Terminal positions scored by utility.
    pub leaves: u64,
    /// Values answered from the transposition table.
    pub table_hits: u64,
}

/// A root action together with its backed-up minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAction {
    /// The action taken from the root.
    pub action: Action,
    /// Utility reached under optimal play after taking it.
    pub value: i32,
}

/// Minimax search engine.
///
/// A fresh engine searches the full game tree on every query. With
/// [`Minimax::with_transposition_table`] it caches backed-up values by
/// position, which changes how much work is done but never the answer.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    table: Option<HashMap<(Board, Side), i32>>,
    stats: SearchStats,
}

impl Minimax {
    /// Creates an engine that searches without caching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that memoizes values across queries.
    pub fn with_transposition_table() -> Self {
        Self {
            table: Some(HashMap::new()),
            stats: SearchStats::default(),
        }
    }

    /// Counters accumulated since creation or the last [`Minimax::reset_stats`].
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Clears the counters. Cached values are kept.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Returns the optimal action for the player to move, or `None` if the
    /// board is terminal.
    ///
    /// X takes the action with the largest value, O the smallest. The first
    /// such action in row-major order wins ties.
    #[instrument(level = "debug", skip_all, fields(to_move = ?board.current_player()))]
    pub fn best_action(&mut self, board: &Board) -> Option<Action> {
        let player = board.current_player()?;
        let scored = self.score_actions(board);

        let mut best: Option<ScoredAction> = None;
        for candidate in scored {
            let better = match (best, player) {
                (None, _) => true,
                (Some(b), Player::X) => candidate.value > b.value,
                (Some(b), Player::O) => candidate.value < b.value,
            };
            if better {
                best = Some(candidate);
            }
        }

        debug!(
            choice = ?best,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            "Search complete"
        );
        best.map(|b| b.action)
    }

    /// Scores every legal action from `board`, in row-major order.
    ///
    /// When X is to move each action is valued by `min_value` of the
    /// resulting board, when O is to move by `max_value`. Terminal boards
    /// yield an empty list.
    #[instrument(level = "debug", skip_all)]
    pub fn score_actions(&mut self, board: &Board) -> Vec<ScoredAction> {
        let Some(player) = board.current_player() else {
            return Vec::new();
        };
        self.stats.nodes += 1;

        let reply = match player {
            Player::X => Side::Min,
            Player::O => Side::Max,
        };
        board
            .successors()
            .map(|(action, next)| ScoredAction {
                action,
                value: self.backup(&next, reply),
            })
            .collect()
    }

    /// Utility of `board` when the maximizer is to move.
    pub fn max_value(&mut self, board: &Board) -> i32 {
        self.backup(board, Side::Max)
    }

    /// Utility of `board` when the minimizer is to move.
    pub fn min_value(&mut self, board: &Board) -> i32 {
        self.backup(board, Side::Min)
    }

    fn backup(&mut self, board: &Board, side: Side) -> i32 {
        if let Some(&value) = self.table.as_ref().and_then(|t| t.get(&(*board, side))) {
            self.stats.table_hits += 1;
            return value;
        }
        self.stats.nodes += 1;

        let value = if board.is_terminal() {
            self.stats.leaves += 1;
            board.utility()
        } else {
            // Non-terminal boards always have at least one successor.
            match side {
                Side::Max => board.successors().fold(i32::MIN, |v, (_, next)| {
                    v.max(self.backup(&next, Side::Min))
                }),
                Side::Min => board.successors().fold(i32::MAX, |v, (_, next)| {
                    v.min(self.backup(&next, Side::Max))
                }),
            }
        };

        if let Some(table) = self.table.as_mut() {
            table.insert((*board, side), value);
        }
        value
    }
}

/// Returns the optimal action for the player to move, or `None` if the board
/// is terminal.
pub fn best_action(board: &Board) -> Option<Action> {
    Minimax::new().best_action(board)
}

/// Backed-up utility of `board` with the maximizer to move.
pub fn max_value(board: &Board) -> i32 {
    Minimax::new().max_value(board)
}

/// Backed-up utility of `board` with the minimizer to move.
pub fn min_value(board: &Board) -> i32 {
    Minimax::new().min_value(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("test board should parse")
    }

    #[test]
    fn test_terminal_board_has_no_action() {
        assert_eq!(best_action(&board("XXX/OO./...")), None);
        assert_eq!(best_action(&board("XOX/XOO/OXX")), None);
        assert!(Minimax::new().score_actions(&board("XOX/XOO/OXX")).is_empty());
    }

    #[test]
    fn test_values_of_terminal_boards_are_utility() {
        let won = board("XXX/OO./...");
        assert_eq!(max_value(&won), 1);
        assert_eq!(min_value(&won), 1);
        let drawn = board("XOX/XOO/OXX");
        assert_eq!(max_value(&drawn), 0);
        assert_eq!(min_value(&drawn), 0);
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let b = board("XX./OO./...");
        assert_eq!(best_action(&b), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let b = board("XX./OO./X..");
        assert_eq!(b.current_player(), Some(Player::O));
        assert_eq!(best_action(&b), Some(Action::new(1, 2)));
    }

    #[test]
    fn test_scores_in_row_major_order() {
        let mut engine = Minimax::new();
        let scored = engine.score_actions(&board("XX./OO./..."));
        let expected = [
            (Action::new(0, 2), 1),
            (Action::new(1, 2), 0),
            (Action::new(2, 0), -1),
            (Action::new(2, 1), -1),
            (Action::new(2, 2), -1),
        ];
        assert_eq!(scored.len(), expected.len());
        for (got, (action, value)) in scored.iter().zip(expected) {
            assert_eq!(got.action, action);
            assert_eq!(got.value, value);
        }
    }

    #[test]
    fn test_tie_goes_to_first_action() {
        // Every reply leaves X winning, so O's first legal square is chosen.
        let b = board("XO./.X./...");
        let mut engine = Minimax::new();
        let scored = engine.score_actions(&b);
        assert!(scored.iter().all(|s| s.value == 1));
        assert_eq!(engine.best_action(&b), Some(scored[0].action));
    }

    #[test]
    fn test_stats_count_nodes_and_leaves() {
        let mut engine = Minimax::new();
        engine.best_action(&board("XX./OO./..."));
        let stats = engine.stats();
        assert_eq!(stats.nodes, 157);
        assert_eq!(stats.leaves, 73);
        assert_eq!(stats.table_hits, 0);

        engine.reset_stats();
        assert_eq!(engine.stats(), SearchStats::default());
    }

    #[test]
    fn test_table_reuses_values_across_queries() {
        let b = board("X../.O./...");
        let mut engine = Minimax::with_transposition_table();
        let first = engine.best_action(&b);
        let nodes = engine.stats().nodes;

        engine.reset_stats();
        assert_eq!(engine.best_action(&b), first);
        assert!(engine.stats().nodes < nodes);
        assert!(engine.stats().table_hits > 0);
    }
}
