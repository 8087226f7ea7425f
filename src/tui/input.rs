//! Keyboard and mouse input mapping.

use super::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::Position;
use ratatui::layout::Rect;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What an input asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Click the cell under the cursor.
    ClickCursor,
    /// Click a specific cell.
    Click(Position),
    /// Start a new game.
    Restart,
    /// Leave the app.
    Quit,
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match direction {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => (row + 1, column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, column + 1),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ClickCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::Click),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a left click inside a board cell to an action.
///
/// `area` is the full frame area the board was laid out in.
pub fn mouse_action(mouse: MouseEvent, area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            ui::cell_at(area, mouse.column, mouse.row).map(Action::Click)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digit_keys_click_cells() {
        let key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(key_action(key), Some(Action::Click(Position::TopLeft)));
        let key = KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE);
        assert_eq!(key_action(key), Some(Action::Click(Position::BottomRight)));
        let key = KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE);
        assert_eq!(key_action(key), None);
    }

    #[test]
    fn test_control_keys() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(key_action(key), Some(Action::Restart));
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(key_action(key), Some(Action::Quit));
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_action(key), Some(Action::ClickCursor));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_action(key), None);
    }
}
