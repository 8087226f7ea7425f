//! History consistency invariant: the move history rebuilds the board.

use super::super::{Board, Game, Mark, Square};
use super::Invariant;

/// Invariant: replaying the history onto an empty board reproduces the
/// current board.
///
/// Every move must land on an empty square and marks must alternate
/// starting with X. This also proves squares are never overwritten.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();
        let mut expected = Mark::X;

        for mov in game.history() {
            if mov.mark != expected || !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.mark));
            expected = expected.opponent();
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "History replays to the current board"
    }
}
