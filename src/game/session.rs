//! Game session: move history, turn tracking, and time-travel.
//!
//! A session owns an append-only list of board snapshots. The displayed
//! step need not be the latest one; jumping back and then moving prunes
//! the abandoned future. Everything a display layer needs (status text,
//! move list, winning line) is derived fresh from session state, never
//! cached.

use super::position::{Coordinate, Position};
use super::rules::{evaluate, Verdict};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One step of history: a board snapshot plus the display coordinate of
/// the move that produced it.
///
/// The initial entry has no coordinate. Entries are created once and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    coordinate: Option<Coordinate>,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            coordinate: None,
        }
    }

    /// The board snapshot at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The coordinate of the move that produced this entry, if any.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

/// Error that can occur when applying a move.
///
/// A rejected move leaves the session unchanged; display layers are free
/// to ignore the error and simply re-render.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// One row of the move list: a human-readable label and the step it
/// jumps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListItem {
    /// Label such as "Go to move (2, 1)".
    pub label: String,
    /// Step index into history.
    pub step: usize,
}

/// State machine over `(history, step_number, x_is_next, sort_ascending)`.
///
/// Exactly two transitions mutate game state ([`GameSession::apply_move`]
/// and [`GameSession::jump_to`]); sort order is a presentation toggle.
/// Invariant after every transition: `x_is_next == (step_number % 2 == 0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    history: Vec<HistoryEntry>,
    step_number: usize,
    x_is_next: bool,
    sort_ascending: bool,
}

impl GameSession {
    /// Creates a session with a single empty-board entry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step_number: 0,
            x_is_next: true,
            sort_ascending: true,
        }
    }

    /// The full history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The currently displayed step.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whether X moves next from the displayed step.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Whether the move list is displayed oldest-first.
    pub fn is_sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// The player to move from the displayed step.
    pub fn to_move(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// The board at the displayed step.
    pub fn current_board(&self) -> &Board {
        self.history[self.step_number].board()
    }

    /// Evaluates the board at the displayed step.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.current_board())
    }

    /// Applies a move at `pos` for the side to move.
    ///
    /// Any history entries beyond the displayed step are discarded first,
    /// so moving after a jump back abandons the old future. The truncated
    /// history is built as a new vector; entries referenced elsewhere stay
    /// intact during the operation.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the displayed board is won or
    /// drawn, and [`MoveError::SquareOccupied`] if the square is taken.
    /// Session state is unchanged on error.
    #[instrument(skip(self), fields(step = self.step_number, to_move = %self.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        let current = &self.history[self.step_number];
        if evaluate(current.board()).is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !current.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move();
        let board = current.board().place(pos, Square::Occupied(mark));

        let mut history: Vec<HistoryEntry> = self.history[..=self.step_number].to_vec();
        history.push(HistoryEntry {
            board,
            coordinate: Some(Coordinate::from(pos)),
        });

        self.step_number = history.len() - 1;
        self.history = history;
        self.x_is_next = !self.x_is_next;
        debug_assert_eq!(self.x_is_next, self.step_number % 2 == 0);

        debug!(%mark, position = %pos, step = self.step_number, "Move applied");
        Ok(())
    }

    /// Jumps the displayed step to `step` without altering history.
    ///
    /// Entries beyond `step` remain intact until the next `apply_move`
    /// prunes them. An out-of-range step is ignored; the UI only presents
    /// valid steps.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "Jump target out of range");
            return;
        }
        self.step_number = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "Jumped to step");
    }

    /// Flips the move-list sort order. Presentation only.
    pub fn toggle_sort_order(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }

    /// Resets the session to a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting session");
        *self = Self::new();
    }

    /// Status line for the displayed step.
    pub fn status_text(&self) -> String {
        match self.verdict() {
            Verdict::Won(win) => format!("Winner: {}", win.player),
            Verdict::Draw => "Game over. Draw!".to_string(),
            Verdict::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// Move list rows in display order.
    ///
    /// Rows are produced in ascending step order, then the whole list is
    /// reversed when sorting descending. Labels come from each entry's
    /// stored coordinate, so toggling sort mid-game never relabels moves.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let mut items: Vec<MoveListItem> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                let label = match entry.coordinate() {
                    Some(coord) => format!("Go to move {}", coord),
                    None => "Go to game start".to_string(),
                };
                MoveListItem { label, step }
            })
            .collect();

        if !self.sort_ascending {
            items.reverse();
        }
        items
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
