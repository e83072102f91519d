//! Application state and logic.

use crate::input::{Action, move_cursor};
use tictactoe::{Game, Position};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    empty_glyph: char,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(empty_glyph: char) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            empty_glyph,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Glyph drawn in empty squares.
    pub fn empty_glyph(&self) -> char {
        self.empty_glyph
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Line shown under the title.
    pub fn status_line(&self) -> String {
        let message = self.game.status().message();
        if message.is_empty() {
            format!("Next player: {}", self.game.next_turn())
        } else {
            message
        }
    }

    /// Applies an action from the keyboard or mouse.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::Restart => self.game.restart(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Rejected clicks leave the game as it was.
    fn play(&mut self, pos: Position) {
        if let Err(e) = self.game.click(pos.to_index()) {
            debug!(error = %e, position = %pos, "Square not played");
        }
    }
}
