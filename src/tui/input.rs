//! Cursor movement for keyboard navigation.

use crate::game::Position;
use crossterm::event::KeyCode;

/// Moves the board cursor based on arrow keys, clamped to the grid.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (col, row) = (index % 3, index / 3);

    let (col, row) = match key {
        KeyCode::Left => (col.saturating_sub(1), row),
        KeyCode::Right => ((col + 1).min(2), row),
        KeyCode::Up => (col, row.saturating_sub(1)),
        KeyCode::Down => (col, (row + 1).min(2)),
        _ => (col, row),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
