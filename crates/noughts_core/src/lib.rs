//! Pure tic-tac-toe game logic.
//!
//! The crate holds the reusable part of the game: a 9-square board, the mark
//! to move, and an outcome that is always derived from the board. A UI shell
//! owns a [`Game`] and feeds it clicked cells; stale clicks are ignored rather
//! than treated as errors.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, Mark, Outcome};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod outcome;
mod position;
mod rules;
mod types;

pub use action::{IgnoredMove, Move, MoveReport};
pub use contracts::{Contract, MoveContract};
pub use game::{Game, Snapshot};
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, TurnParityInvariant,
};
pub use outcome::Outcome;
pub use position::{Position, PositionParseError};
pub use rules::{LINES, evaluate, is_full, winner, winning_line};
pub use types::{Board, BoardParseError, Mark, Square};
