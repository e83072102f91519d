//! Postconditions for move application.
//!
//! A legal move changes exactly one square, from empty to the mark
//! [`next_turn`] predicted, and never unbalances the X/O counts. These hold
//! by construction in [`try_apply_move`](super::try_apply_move); the
//! contract re-checks them in debug builds.

use super::action::MoveError;
use super::rules::next_turn;
use super::{Board, Player, Position, Square};
use tracing::{instrument, warn};

/// Contract for a single move transition.
pub struct MoveContract;

impl MoveContract {
    /// Checks that `after` is `before` plus one mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvariantViolation`] describing every
    /// postcondition that failed.
    #[instrument(skip(before, after))]
    pub fn post(before: &Board, after: &Board, pos: Position) -> Result<(), MoveError> {
        let violations: Vec<&str> = [
            (SingleSquareChanged::holds(before, after, pos), SingleSquareChanged::DESCRIPTION),
            (MarkMatchesTurn::holds(before, after, pos), MarkMatchesTurn::DESCRIPTION),
            (BalancedMarks::preserved(before, after), BalancedMarks::DESCRIPTION),
        ]
        .into_iter()
        .filter_map(|(ok, description)| (!ok).then_some(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(?violations, "Move postcondition failed");
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                violations.join("; ")
            )))
        }
    }
}

/// Only the target square changed, and it was empty before.
pub struct SingleSquareChanged;

impl SingleSquareChanged {
    const DESCRIPTION: &'static str = "Exactly one previously empty square changed";

    fn holds(before: &Board, after: &Board, pos: Position) -> bool {
        before.is_empty(pos)
            && !after.is_empty(pos)
            && Position::ALL
                .iter()
                .filter(|p| **p != pos)
                .all(|p| before.get(*p) == after.get(*p))
    }
}

/// The new mark belongs to the player whose turn it was.
pub struct MarkMatchesTurn;

impl MarkMatchesTurn {
    const DESCRIPTION: &'static str = "Placed mark matches the player to move";

    fn holds(before: &Board, after: &Board, pos: Position) -> bool {
        after.get(pos) == Square::Occupied(next_turn(before))
    }
}

/// X has either as many marks as O or exactly one more.
pub struct BalancedMarks;

impl BalancedMarks {
    const DESCRIPTION: &'static str = "X leads O by zero or one marks";

    /// Checks the balance on a single board.
    pub fn holds(board: &Board) -> bool {
        let x = board.count_of(Player::X);
        let o = board.count_of(Player::O);
        x == o || x == o + 1
    }

    /// A balanced board stays balanced across a transition.
    pub fn preserved(before: &Board, after: &Board) -> bool {
        !Self::holds(before) || Self::holds(after)
    }
}
