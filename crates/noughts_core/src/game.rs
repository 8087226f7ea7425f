//! The game state machine.
//!
//! A [`Game`] is owned by its caller; there is no shared or global session
//! store. It is mutated only by [`Game::apply_move`] (or its typed form
//! [`Game::place`]) and [`Game::reset`].

use super::action::{IgnoredMove, Move, MoveReport};
use super::contracts::{Contract, MoveContract};
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single tic-tac-toe game.
///
/// The outcome is not stored: [`Game::outcome`] evaluates the board each time
/// it is asked, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            history: Vec::new(),
        }
    }

    /// Builds a fresh game and applies each index in order.
    ///
    /// Stale or out-of-range indices are skipped exactly as
    /// [`Game::apply_move`] skips them.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut game = Self::new();
        for &index in indices {
            game.apply_move(index);
        }
        game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose move is next.
    ///
    /// Once the game ends this stays on the mark that made the last move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Derives the outcome from the board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board)
    }

    /// Applies a click on the cell at `index` (0-8).
    ///
    /// The click is ignored, leaving every part of the state untouched, when
    /// the game is over, the square is taken, or the index is off the board.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> MoveReport {
        match Position::from_index(index) {
            Some(position) => self.place(position),
            None => {
                debug!(index, "Ignoring click outside the board");
                MoveReport::Ignored(IgnoredMove::OutOfRange(index))
            }
        }
    }

    /// Places the current mark at `position`.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place(&mut self, position: Position) -> MoveReport {
        if let Err(reason) = MoveContract::pre(self, &position) {
            debug!(%reason, "Ignoring click");
            return MoveReport::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let played = Move::new(self.to_move, position);
        self.board.set(position, Square::Occupied(played.mark));
        self.history.push(played);

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, plies = self.history.len(), "Game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }
        debug!(%played, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, self) {
            tracing::error!(?violations, "Move broke game invariants");
            debug_assert!(false, "Move broke game invariants: {:?}", violations);
        }

        MoveReport::Applied { played, outcome }
    }

    /// Returns to the initial state. Valid in any state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(plies = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Captures the state a shell renders from.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            outcome: self.outcome(),
            winning_line: self.winning_line(),
            history: self.history.clone(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a game, re-read by the shell after each update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Mark whose move is next.
    pub to_move: Mark,
    /// Outcome derived from `board`.
    pub outcome: Outcome,
    /// Completed line, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Moves since the last reset.
    pub history: Vec<Move>,
}
