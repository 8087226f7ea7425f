//! Contract-based validation for moves.
//!
//! Preconditions decide whether a click is applied or ignored.
//! Postconditions check that an applied move kept every invariant.

use super::action::IgnoredMove;
use super::game::Game;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::position::Position;
use super::types::Square;
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Reason the precondition rejects an action.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Contract for placing the current mark.
///
/// Preconditions:
/// - the game is still in progress
/// - the square is empty
///
/// Postconditions:
/// - exactly one square changed, from empty to occupied
/// - every invariant in [`GameInvariants`] holds
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    type Rejection = IgnoredMove;

    #[instrument(skip(game))]
    fn pre(game: &Game, position: &Position) -> Result<(), IgnoredMove> {
        let outcome = game.outcome();
        if outcome.is_terminal() {
            return Err(IgnoredMove::GameOver(outcome));
        }
        if !game.board().is_empty(*position) {
            return Err(IgnoredMove::SquareOccupied(*position));
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match GameInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| before.board().get(*p) != after.board().get(*p))
            .collect();
        let single_fill = match changed.as_slice() {
            [p] => before.board().get(*p) == Square::Empty,
            _ => false,
        };
        if !single_fill {
            violations.push(InvariantViolation::new(
                "A move fills exactly one empty square",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
