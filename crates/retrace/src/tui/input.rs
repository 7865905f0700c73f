//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use retrace_tictactoe::Position;

/// Moves the board cursor one cell for an arrow key.
///
/// The cursor stops at the board edges. Other keys leave it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::at(r, column)),
        KeyCode::Down => Position::at(row + 1, column),
        KeyCode::Left => column.checked_sub(1).and_then(|c| Position::at(row, c)),
        KeyCode::Right => Position::at(row, column + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Cell index for a digit key `1`-`9`.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}
