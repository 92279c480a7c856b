//! Keyboard helpers for board navigation.

use crossterm::event::KeyCode;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: usize, side: usize, key: KeyCode) -> usize {
    let (line, offset) = (cursor / side, cursor % side);

    match key {
        KeyCode::Left if offset > 0 => cursor - 1,
        KeyCode::Right if offset + 1 < side => cursor + 1,
        KeyCode::Up if line > 0 => cursor - side,
        KeyCode::Down if line + 1 < side => cursor + side,
        _ => cursor,
    }
}

/// Maps the digit keys 1-9 to cell indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
        _ => None,
    }
}
