//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The outcome of a game is
//! never stored; it is recomputed from the board with [`evaluate`].

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, winner, winning_line};

use super::outcome::Outcome;
use super::types::Board;
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A completed line wins; otherwise a full board is a draw and anything else
/// is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
