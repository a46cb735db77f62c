//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Evaluation is separated from board
//! storage so it can be run against any snapshot in session history
//! without touching session state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, Win, LINES};

use super::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won(Win),
    /// Board is full with no winner.
    Draw,
}

impl Verdict {
    /// Returns true if no further moves are legal against this board.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Returns the winning line details, if any.
    pub fn win(&self) -> Option<&Win> {
        match self {
            Verdict::Won(win) => Some(win),
            _ => None,
        }
    }
}

/// Evaluates a board snapshot.
///
/// Checks the 8 fixed lines first; a full board with no winner is a
/// draw; anything else is in progress. Pure function of the squares,
/// callable against any point in history.
#[instrument]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some(win) = check_winner(board) {
        return Verdict::Won(win);
    }
    if is_full(board) {
        return Verdict::Draw;
    }
    Verdict::InProgress
}

#[cfg(test)]
mod tests {
    use super::super::{Player, Position, Square};
    use super::*;

    #[test]
    fn test_evaluate_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Verdict::InProgress);
    }

    #[test]
    fn test_evaluate_draw() {
        let mut board = Board::new();
        // X O X / O X X / O X O - full, no line
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), Verdict::Draw);
    }

    #[test]
    fn test_evaluate_win_beats_full_board() {
        let mut board = Board::new();
        // X X X / O O X / O X O - full board where X holds the top row
        let marks = [
            Player::X,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        let verdict = evaluate(&board);
        assert!(verdict.is_terminal());
        assert_eq!(verdict.win().map(|w| w.player), Some(Player::X));
    }
}
