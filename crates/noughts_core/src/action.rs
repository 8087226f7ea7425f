//! Moves and move reports.
//!
//! A move is a domain event: a mark placed at a position. Applying a click
//! always yields a [`MoveReport`] so the caller can log or render what
//! happened, but stale clicks are never errors.

use super::outcome::Outcome;
use super::position::Position;
use super::types::Mark;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a click left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum IgnoredMove {
    /// The index is not a board cell.
    #[display("index {} is outside the board", _0)]
    OutOfRange(usize),

    /// The square already holds a mark.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already ended.
    #[display("game is over ({})", _0)]
    GameOver(Outcome),
}

/// What happened when a click was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReport {
    /// The mark was placed.
    Applied {
        /// The move that was made.
        played: Move,
        /// Outcome after the move.
        outcome: Outcome,
    },
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveReport {
    /// Returns true if the board changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveReport::Applied { .. })
    }
}
