//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::config::Config;
use crate::shell::Shell;
use noughts_core::Position;
use tracing::{debug, info};

/// Main application state.
#[derive(Debug)]
pub struct App {
    shell: Shell,
    cursor: Position,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &Config) -> Self {
        Self {
            shell: Shell::new(),
            cursor: Position::Center,
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their key.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies an input action to the session.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::ClickCursor => {
                self.shell.notify_click(self.cursor.to_index());
            }
            Action::Click(position) => {
                self.cursor = position;
                self.shell.notify_click(position.to_index());
            }
            Action::Restart => {
                self.shell.notify_restart();
                self.cursor = Position::Center;
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }
}
