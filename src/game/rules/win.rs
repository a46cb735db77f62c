//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A winning three-in-a-row: the player and the exact line of positions.
///
/// The line is reported so a display layer can highlight the winning
/// squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The player who completed the line.
    pub player: Player,
    /// The three positions forming the line.
    pub line: [Position; 3],
}

/// The 8 possible winning lines, in the fixed evaluation order:
/// rows top to bottom, columns left to right, then the two diagonals.
///
/// The first matching line wins, which keeps evaluation a deterministic
/// contract even though standard play cannot produce two lines at once.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player and line if a player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(Win { player, line });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));

        let win = check_winner(&board).expect("top row should win");
        assert_eq!(win.player, Player::X);
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomCenter, Square::Occupied(Player::O));

        let win = check_winner(&board).expect("middle column should win");
        assert_eq!(win.player, Player::O);
        assert_eq!(
            win.line,
            [Position::TopCenter, Position::Center, Position::BottomCenter]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        let win = check_winner(&board).expect("diagonal should win");
        assert_eq!(win.player, Player::O);
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_fixed_order_wins() {
        // Contrived double win: X holds the top row and the left column.
        // The row comes first in LINES, so it is the reported line.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }

        let win = check_winner(&board).expect("board has a winner");
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
