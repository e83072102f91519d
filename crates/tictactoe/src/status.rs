//! Derived game status.

use super::rules::{find_winner, is_full, next_turn};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where the game stands, derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player whose mark goes down next.
        next: Player,
    },
    /// A player holds a full line.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Derives the status of `board`. A win takes precedence over a full board.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = find_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: next_turn(board),
            }
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Status line text: `"X is Winner"`, `"Draw"`, or empty while playing.
    pub fn message(&self) -> String {
        match self {
            GameStatus::Won(player) => format!("{} is Winner", player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress { .. } => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply_move;

    fn play(moves: &[usize]) -> Board {
        moves.iter().fold(Board::new(), |b, i| apply_move(&b, *i))
    }

    #[test]
    fn test_new_game_in_progress() {
        let status = GameStatus::of(&Board::new());
        assert_eq!(status, GameStatus::InProgress { next: Player::X });
        assert!(!status.is_over());
        assert_eq!(status.message(), "");
    }

    #[test]
    fn test_won_message() {
        let status = GameStatus::of(&play(&[0, 1, 3, 2, 6]));
        assert_eq!(status, GameStatus::Won(Player::X));
        assert_eq!(status.message(), "X is Winner");
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        // X completes the main diagonal with the ninth mark.
        let status = GameStatus::of(&play(&[0, 1, 2, 5, 4, 6, 3, 7, 8]));
        assert_eq!(status, GameStatus::Won(Player::X));
    }

    #[test]
    fn test_draw_message() {
        let status = GameStatus::of(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]));
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(status.message(), "Draw");
    }
}
