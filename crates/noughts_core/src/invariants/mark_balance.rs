//! Mark balance invariant: X leads O by at most one.

use super::super::{Game, Mark};
use super::Invariant;

/// Invariant: the X count equals the O count or exceeds it by one.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x_count = game.board().count(Mark::X);
        let o_count = game.board().count(Mark::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or lead by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_holds_through_a_game() {
        let mut game = Game::new();
        for index in [4, 0, 8, 2] {
            game.apply_move(index);
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut game = Game::new();
        game.board.set(Position::Center, Square::Occupied(Mark::O));
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
