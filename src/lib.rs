//! noughts - two-player tic-tac-toe
//!
//! The game rules live in [`noughts_core`]. This crate wraps them in a
//! caller-owned [`Shell`] session and puts front-ends on top of it.
//!
//! # Architecture
//!
//! - **Shell**: one session; takes clicks and restarts, exposes a snapshot
//! - **TUI**: ratatui front-end driving a shell from keys and mouse clicks
//! - **Replay**: headless click replay and board evaluation
//!
//! # Example
//!
//! ```
//! use noughts::Shell;
//!
//! let mut shell = Shell::new();
//! for index in [0, 3, 1, 4, 2] {
//!     shell.notify_click(index);
//! }
//! assert_eq!(shell.status_line(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod shell;
pub mod tui;

pub use config::{Config, ConfigError};
pub use shell::Shell;
