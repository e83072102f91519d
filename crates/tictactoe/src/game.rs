//! Session state container.

use super::action::{MoveError, reset_board, try_apply_move};
use super::rules::{find_winner, is_draw, next_turn, winning_line};
use super::status::GameStatus;
use super::{Board, Line, Player};
use tracing::{debug, info, instrument};

/// Holds the current board for one play session.
///
/// The board is the only state. Turn, winner and status are recomputed
/// from it on every call, and each click swaps in a new board value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: reset_board(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark goes down next.
    pub fn next_turn(&self) -> Player {
        next_turn(&self.board)
    }

    /// Winner, if any.
    pub fn winner(&self) -> Option<Player> {
        find_winner(&self.board)
    }

    /// Line that decided the game, if any.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    /// True when the board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        is_draw(&self.board)
    }

    /// Derived game status.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Plays the square at `index` for whoever is to move.
    ///
    /// On rejection the board is kept as is and the reason is returned.
    #[instrument(skip(self), fields(next = %self.next_turn()))]
    pub fn click(&mut self, index: usize) -> Result<(), MoveError> {
        match try_apply_move(&self.board, index) {
            Ok(board) => {
                self.board = board;
                let status = self.status();
                if status.is_over() {
                    info!(?status, "Game over");
                }
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "Click ignored");
                Err(e)
            }
        }
    }

    /// Replaces the board with an empty one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(filled = self.board.filled_count(), "Restarting game");
        self.board = reset_board();
    }
}
