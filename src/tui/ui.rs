//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use noughts_core::{Mark, Outcome, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "arrows/hjkl move · enter/space or 1-9 place · r restart · q quit";

/// Screen regions.
struct Screen {
    title: Rect,
    board: Rect,
    status: Rect,
    help: Rect,
}

fn screen(area: Rect) -> Screen {
    let [title, board, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    Screen {
        title,
        board: center_rect(board, BOARD_WIDTH, BOARD_HEIGHT),
        status,
        help,
    }
}

/// Renders the whole frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = screen(frame.area());
    let view = app.shell().view();

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    draw_board(frame, screen.board, app);

    let status_style = match view.outcome {
        Outcome::InProgress => Style::default().fg(Color::Yellow),
        Outcome::Won(_) | Outcome::Draw => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        }
    };
    let mut status = app.shell().status_line();
    if view.outcome.is_terminal() {
        status.push_str(" Press 'r' to restart.");
    }
    let status = Paragraph::new(status)
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, screen.status);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, screen.help);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let [_, row_gap_1, _, row_gap_2, _] = board_rows(area);
    draw_separator(frame, row_gap_1);
    draw_separator(frame, row_gap_2);

    let view = app.shell().view();
    let winning: &[Position] = match &view.winning_line {
        Some(line) => line,
        None => &[],
    };
    let last = app.shell().game().last_move().map(|m| m.position);

    for (pos, cell) in Position::ALL.into_iter().zip(board_cells(area)) {
        let highlight = CellHighlight {
            cursor: pos == app.cursor() && !view.outcome.is_terminal(),
            winning: winning.contains(&pos),
            last: last == Some(pos),
        };
        draw_cell(frame, cell, view.board.get(pos), pos, highlight, app.show_cell_numbers());
    }
}

#[derive(Debug, Clone, Copy)]
struct CellHighlight {
    cursor: bool,
    winning: bool,
    last: bool,
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    highlight: CellHighlight,
    show_numbers: bool,
) {
    let (symbol, mut style) = match square {
        Square::Empty if show_numbers => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if highlight.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if highlight.cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    if highlight.last {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let text = Text::from(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ]);
    let paragraph = Paragraph::new(text)
        .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn board_rows(area: Rect) -> [Rect; 5] {
    Layout::vertical([
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
    ])
    .areas(area)
}

fn board_cells(area: Rect) -> [Rect; 9] {
    let [top, _, middle, _, bottom] = board_rows(area);
    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [top, middle, bottom].into_iter().enumerate() {
        let [left, _, center, _, right] = Layout::horizontal([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .areas(row_area);
        cells[row * 3] = left;
        cells[row * 3 + 1] = center;
        cells[row * 3 + 2] = right;
    }
    cells
}

/// Screen rectangles of the 9 cells, in index order, for a frame of `area`.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    board_cells(screen(area).board)
}

/// Finds the cell under a screen coordinate.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_areas(area)
        .into_iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vert, _] = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(height) / 2),
        Constraint::Length(height),
        Constraint::Length(area.height.saturating_sub(height) / 2),
    ])
    .areas(area);

    let [_, centered, _] = Layout::horizontal([
        Constraint::Length(area.width.saturating_sub(width) / 2),
        Constraint::Length(width),
        Constraint::Length(area.width.saturating_sub(width) / 2),
    ])
    .areas(vert);
    centered
}
