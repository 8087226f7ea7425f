//! Rendering tests for the terminal UI.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noughts::Config;
use noughts::tui::{Action, App, cell_areas, draw, mouse_action};
use noughts_core::{Mark, Position, Square};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Modifier};

fn render_buffer(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn render(app: &App) -> String {
    render_buffer(app)
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Returns whether the mark drawn in `pos` is underlined.
fn mark_underlined(buffer: &Buffer, pos: Position) -> bool {
    let cell = cell_areas(Rect::new(0, 0, 80, 24))[pos.to_index()];
    let y = cell.y + 1;
    (cell.x..cell.x + cell.width)
        .map(|x| &buffer[(x, y)])
        .find(|c| c.symbol() == "X" || c.symbol() == "O")
        .is_some_and(|c| c.modifier.contains(Modifier::UNDERLINED))
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_renders_title_and_turn() {
    let app = App::new(&Config::default());
    let screen = render(&app);
    assert!(screen.contains("Tic-Tac-Toe"));
    assert!(screen.contains("Player X's turn"));
}

#[test]
fn test_renders_marks_and_win() {
    let mut app = App::new(&Config::default());
    for index in [0, 3, 1, 4, 2] {
        app.handle(Action::Click(Position::from_index(index).unwrap()));
    }
    let screen = render(&app);
    assert!(screen.contains("Player X wins! Press 'r' to restart."));
    assert!(screen.contains('X'));
    assert!(screen.contains('O'));
}

#[test]
fn test_mouse_click_places_mark() {
    let area = Rect::new(0, 0, 80, 24);
    let target = cell_areas(area)[Position::BottomRight.to_index()];

    let action = mouse_action(click(target.x + 1, target.y + 1), area);
    assert_eq!(action, Some(Action::Click(Position::BottomRight)));

    let mut app = App::new(&Config::default());
    app.handle(action.unwrap());
    assert_eq!(
        app.shell().view().board.get(Position::BottomRight),
        Square::Occupied(Mark::X)
    );
}

#[test]
fn test_mouse_click_outside_board_ignored() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(mouse_action(click(0, 23), area), None);
}

#[test]
fn test_last_move_is_underlined() {
    let mut app = App::new(&Config::default());
    app.handle(Action::Click(Position::TopLeft));
    app.handle(Action::Click(Position::Center));

    let buffer = render_buffer(&app);
    assert!(mark_underlined(&buffer, Position::Center));
    assert!(!mark_underlined(&buffer, Position::TopLeft));
}
