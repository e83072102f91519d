//! Applying moves to a board.
//!
//! A move is a click on a square. The engine either produces a new board
//! with the current player's mark on that square, or leaves the board
//! exactly as it was. [`apply_move`] ignores rejected clicks silently;
//! [`try_apply_move`] reports why a click was rejected.

use super::rules::{find_winner, next_turn};
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square (must be 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    IndexOutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Places the next player's mark at `index`, reporting rejections.
///
/// Preconditions are checked in order: index in range, no winner yet,
/// square empty. On rejection the input board is not modified (it is
/// borrowed immutably) and the reason is returned.
///
/// # Errors
///
/// Returns [`MoveError::IndexOutOfRange`], [`MoveError::GameOver`] or
/// [`MoveError::CellOccupied`] when the corresponding precondition fails.
#[instrument(skip(board), fields(filled = board.filled_count()))]
pub fn try_apply_move(board: &Board, index: usize) -> Result<Board, MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::IndexOutOfRange(index))?;

    if let Some(winner) = find_winner(board) {
        return Err(MoveError::GameOver(winner));
    }

    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }

    let player = next_turn(board);
    let after = board.with(pos, Square::Occupied(player));

    #[cfg(debug_assertions)]
    super::contracts::MoveContract::post(board, &after, pos)?;

    debug!(%player, position = %pos, "Move applied");
    Ok(after)
}

/// Places the next player's mark at `index`, or returns the board unchanged.
///
/// Clicking a filled square, clicking after the game is won, or passing an
/// index outside 0-8 are all no-ops.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize) -> Board {
    match try_apply_move(board, index) {
        Ok(after) => after,
        Err(e) => {
            debug!(error = %e, index, "Move ignored");
            *board
        }
    }
}

/// Returns a fresh board of nine empty squares.
#[instrument]
pub fn reset_board() -> Board {
    Board::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_is_x() {
        let board = apply_move(&reset_board(), 4);
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_second_move_is_o() {
        let board = apply_move(&apply_move(&reset_board(), 0), 8);
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let board = reset_board();
        assert_eq!(
            try_apply_move(&board, 9),
            Err(MoveError::IndexOutOfRange(9))
        );
        assert_eq!(apply_move(&board, usize::MAX), board);
    }

    #[test]
    fn test_occupied_rejected() {
        let board = apply_move(&reset_board(), 2);
        assert_eq!(
            try_apply_move(&board, 2),
            Err(MoveError::CellOccupied(Position::TopRight))
        );
        assert_eq!(apply_move(&board, 2), board);
    }

    #[test]
    fn test_out_of_range_checked_before_game_over() {
        let board = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(reset_board(), |b, i| apply_move(&b, i));
        assert_eq!(find_winner(&board), Some(Player::X));
        assert_eq!(
            try_apply_move(&board, 11),
            Err(MoveError::IndexOutOfRange(11))
        );
        assert_eq!(try_apply_move(&board, 0), Err(MoveError::GameOver(Player::X)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::GameOver(Player::O).to_string(),
            "Game is already over: O won"
        );
    }
}
