//! Typed board positions.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions map one-to-one onto the row-major indices 0-8, where
/// `row = index / 3` and `column = index % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from row and column.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Parses an index (0-8) or a label.
    ///
    /// Labels match case-insensitively and partially, so `"center"` and
    /// `"bottom-r"` both resolve.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }
        if s.is_empty() {
            return None;
        }

        let s_lower = s.to_lowercase();
        Position::iter().find(|pos| {
            let label = pos.label().to_lowercase();
            label == s_lower || label.starts_with(&s_lower)
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when text names no board position.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("no board position named {:?}", _0)]
pub struct PositionParseError(pub String);

impl std::error::Error for PositionParseError {}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label_or_number(s).ok_or_else(|| PositionParseError(s.to_string()))
    }
}
