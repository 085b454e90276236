//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) that decide wins and full
//! boards. The board's own query methods are built on top of these.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_line};
