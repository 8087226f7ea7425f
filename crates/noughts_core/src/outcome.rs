//! Game outcome.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a game, derived from the board.
///
/// `Won` and `Draw` are terminal; only a reset leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still possible.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// The board is full with no line.
    Draw,
}

impl Outcome {
    /// Returns true if the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
