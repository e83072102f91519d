//! Tic-tac-toe rules engine.
//!
//! The whole game state is a [`Board`] of nine squares. Everything else,
//! whose turn it is, who has won, whether it is a draw, is a pure function
//! of that board.
//!
//! # Example
//!
//! ```
//! use tictactoe::{apply_move, find_winner, next_turn, reset_board, Player};
//!
//! let board = [0, 1, 3, 2, 6]
//!     .into_iter()
//!     .fold(reset_board(), |board, index| apply_move(&board, index));
//!
//! assert_eq!(find_winner(&board), Some(Player::X));
//! // Further clicks are ignored once the game is won.
//! assert_eq!(apply_move(&board, 4), board);
//! # let _ = next_turn(&board);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod position;
mod rules;
mod status;
mod types;

pub use action::{MoveError, apply_move, reset_board, try_apply_move};
pub use contracts::{BalancedMarks, MoveContract};
pub use game::Game;
pub use position::Position;
pub use rules::{LINES, Line, find_winner, is_draw, is_full, next_turn, winning_line};
pub use status::GameStatus;
pub use types::{Board, Player, Square};

/// Empty squares still open for play; none once the game is won.
pub fn valid_moves(board: &Board) -> Vec<Position> {
    if find_winner(board).is_some() {
        Vec::new()
    } else {
        Position::empty_squares(board)
    }
}
