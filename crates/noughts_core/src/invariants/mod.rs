//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that hold after every applied move.
//! They are checked in debug builds and tested independently.

mod history_consistent;
mod mark_balance;
mod turn_parity;

pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use turn_parity::TurnParityInvariant;

use derive_more::Display;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    HistoryConsistentInvariant,
);
