//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The 8 winning lines, checked in this order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).mark())
}
