//! The UI-facing session object.
//!
//! A front-end owns one [`Shell`] per player session and calls it directly
//! from its event handlers; nothing is stashed for a later render pass.

use noughts_core::{Game, Mark, MoveReport, Outcome, Snapshot};
use tracing::{debug, instrument};

/// One game session as seen by a front-end.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    game: Game,
}

impl Shell {
    /// Creates a session with a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a click on cell `index` (0-8).
    #[instrument(skip(self))]
    pub fn notify_click(&mut self, index: usize) -> MoveReport {
        let report = self.game.apply_move(index);
        if let MoveReport::Ignored(reason) = report {
            debug!(index, %reason, "Click had no effect");
        }
        report
    }

    /// Reports the restart button.
    #[instrument(skip(self))]
    pub fn notify_restart(&mut self) {
        self.game.reset();
    }

    /// Returns the state to render.
    pub fn view(&self) -> Snapshot {
        self.game.snapshot()
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Status text shown under the board.
    pub fn status_line(&self) -> String {
        status_line(self.game.outcome(), self.game.to_move())
    }
}

/// Status text for an outcome and the mark to move.
pub fn status_line(outcome: Outcome, to_move: Mark) -> String {
    match outcome {
        Outcome::InProgress => format!("Player {}'s turn", to_move),
        Outcome::Won(mark) => format!("Player {} wins!", mark),
        Outcome::Draw => "It's a draw!".to_string(),
    }
}
