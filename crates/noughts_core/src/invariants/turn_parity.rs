//! Turn parity invariant: X moves on even plies, O on odd plies.

use super::super::{Game, Mark};
use super::Invariant;

/// Invariant: while the game is in progress, the mark to move matches the
/// ply count.
///
/// After a terminal move the turn is left on the mark that just played, so
/// finished games are exempt.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        if game.outcome().is_terminal() {
            return true;
        }

        let expected = if game.board().occupied() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Mark to move matches ply parity (X on even, O on odd)"
    }
}
