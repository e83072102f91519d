//! Turn derivation.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns whose mark goes down next.
///
/// X moves when an even number of squares are filled, O when odd.
/// Defined for every board; on a full board the answer is simply unused.
#[instrument(skip(board), fields(filled = board.filled_count()))]
pub fn next_turn(board: &Board) -> Player {
    if board.filled_count() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}
