//! Application state and input handling.

use crate::game::{GameSession, Position};
use tracing::debug;

/// Main application state: the game session plus the board cursor.
///
/// All game facts shown on screen (status, move list, winning line) are
/// derived from the session on every render; the app holds no cached
/// copies of them.
pub struct App {
    session: GameSession,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new(sort_ascending: bool) -> Self {
        let mut session = GameSession::new();
        if !sort_ascending {
            session.toggle_sort_order();
        }
        Self {
            session,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests exit from the event loop.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Moves the board cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Places the side to move at the cursor.
    ///
    /// Rejected moves (occupied square, finished game) are ignored; the
    /// next render shows the unchanged session.
    pub fn place_at_cursor(&mut self) {
        if let Err(err) = self.session.apply_move(self.cursor) {
            debug!(%err, position = %self.cursor, "Move rejected");
        }
    }

    /// Jumps one step back in history.
    pub fn step_back(&mut self) {
        let step = self.session.step_number();
        if step > 0 {
            self.session.jump_to(step - 1);
        }
    }

    /// Jumps one step forward in history.
    pub fn step_forward(&mut self) {
        self.session.jump_to(self.session.step_number() + 1);
    }

    /// Jumps to the game start.
    pub fn jump_to_start(&mut self) {
        self.session.jump_to(0);
    }

    /// Flips the move-list sort order.
    pub fn toggle_sort_order(&mut self) {
        self.session.toggle_sort_order();
    }

    /// Restarts the game, keeping the sort order and cursor.
    pub fn restart(&mut self) {
        let ascending = self.session.is_sort_ascending();
        self.session.restart();
        if !ascending {
            self.session.toggle_sort_order();
        }
    }
}
