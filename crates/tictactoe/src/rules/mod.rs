//! Game rules for tic-tac-toe.
//!
//! Pure functions that derive turn, winner and draw from a board
//! snapshot. Nothing here is cached: every answer is recomputed from
//! the squares.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::next_turn;
pub use win::{LINES, Line, find_winner, winning_line};
