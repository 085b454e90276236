//! Tests for the board state model.

use tictactoe_minimax::{Action, Board, GameStatus, InvalidAction, Player, Square};

fn board(s: &str) -> Board {
    s.parse().expect("test board should parse")
}

#[test]
fn test_initial_state() {
    let board = Board::initial_state();
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(board.current_player(), Some(Player::X));
    assert_eq!(board.legal_actions().map(|a| a.len()), Some(9));
    assert!(!board.is_terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board, Board::default());
}

#[test]
fn test_one_move_leaves_eight_actions() {
    let board = Board::initial_state().apply(Action::new(0, 0)).unwrap();
    let actions = board.legal_actions().unwrap();
    assert_eq!(actions.len(), 8);
    assert!(!actions.contains(&Action::new(0, 0)));
    assert_eq!(board.current_player(), Some(Player::O));
}

#[test]
fn test_apply_changes_only_target_square() {
    let start = board("XO./.X./...");
    let mover = start.current_player().unwrap();
    for action in start.legal_actions().unwrap() {
        let next = start.apply(action).unwrap();
        for other in Action::ALL {
            if other == action {
                assert_eq!(next.get(other), Some(Square::Occupied(mover)));
            } else {
                assert_eq!(next.get(other), start.get(other));
            }
        }
    }
}

#[test]
fn test_current_player_alternates() {
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)];
    let mut board = Board::initial_state();
    let mut expected = Player::X;
    for (row, col) in moves {
        assert_eq!(board.current_player(), Some(expected));
        board = board.apply(Action::from((row, col))).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn test_apply_occupied_square() {
    let board = Board::initial_state().apply(Action::new(1, 1)).unwrap();
    assert_eq!(
        board.apply(Action::new(1, 1)),
        Err(InvalidAction::SquareOccupied(Action::new(1, 1)))
    );
}

#[test]
fn test_apply_out_of_range() {
    let board = Board::initial_state();
    assert_eq!(
        board.apply(Action::new(3, 0)),
        Err(InvalidAction::OutOfRange(Action::new(3, 0)))
    );
    assert_eq!(
        board.apply(Action::new(0, 7)),
        Err(InvalidAction::OutOfRange(Action::new(0, 7)))
    );
}

#[test]
fn test_apply_on_terminal_board() {
    // Won with empty squares left.
    let won = board("XXX/OO./...");
    assert!(won.legal_actions().is_some());
    assert_eq!(won.apply(Action::new(2, 2)), Err(InvalidAction::GameOver));

    // Full and drawn.
    let drawn = board("XOX/XOO/OXX");
    assert_eq!(drawn.legal_actions(), None);
    assert_eq!(drawn.apply(Action::new(0, 0)), Err(InvalidAction::GameOver));
}

#[test]
fn test_invalid_action_messages() {
    let err = Board::initial_state()
        .apply(Action::new(0, 0))
        .unwrap()
        .apply(Action::new(0, 0))
        .unwrap_err();
    assert!(err.to_string().contains("occupied"));
    assert_eq!(InvalidAction::GameOver.to_string(), "Game is already over");
}

#[test]
fn test_full_board_without_line() {
    let board = board("XOX/XOO/OXX");
    assert!(board.is_terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board.utility(), 0);
    assert_eq!(board.current_player(), None);
    assert_eq!(board.status(), GameStatus::Draw);
}

#[test]
fn test_terminal_with_empty_squares() {
    let board = board("OOO/XX./X.X");
    assert!(board.is_terminal());
    assert_eq!(board.winner(), Some(Player::O));
    assert_eq!(board.utility(), -1);
    assert_eq!(board.current_player(), None);
}

#[test]
fn test_utility_of_terminal_boards() {
    let cases = [
        ("XXX/OO./...", 1),
        ("X.O/XO./X..", 1),
        ("XOX/.O./XOX", -1),
        ("OXX/XOO/XXO", -1),
        ("XOX/XOO/OXX", 0),
    ];
    for (s, expected) in cases {
        let b = board(s);
        assert!(b.is_terminal(), "{} should be terminal", s);
        assert_eq!(b.utility(), expected, "utility of {}", s);
        let line_owner = match expected {
            1 => Some(Player::X),
            -1 => Some(Player::O),
            _ => None,
        };
        assert_eq!(b.winner(), line_owner);
    }
}

#[test]
fn test_utility_is_total_on_open_boards() {
    assert_eq!(Board::initial_state().utility(), 0);
    assert_eq!(board("XO./.../...").utility(), 0);
}

#[test]
fn test_immediate_win_scenario() {
    let start = board("XX./OO./...");
    assert_eq!(start.current_player(), Some(Player::X));
    let after = start.apply(Action::new(0, 2)).unwrap();
    assert!(after.is_terminal());
    assert_eq!(after.utility(), 1);
}
