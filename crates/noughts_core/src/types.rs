//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares in row-major order.
    ///
    /// No consistency checks are made; boards built this way may hold mark
    /// counts that no legal game reaches.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Counts the occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the text doubles as a move
    /// guide.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The string did not describe exactly nine cells.
    #[display("expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character is neither a mark, an empty marker, nor a separator.
    #[display("invalid character {:?} for cell {}", character, cell)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Index of the cell being read.
        cell: usize,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `-`, `_` and digits `1`-`9` are
    /// empty squares. Whitespace, `/` and `|` separate rows and are skipped,
    /// as are `-+-+-` rule lines, so [`Board::display`] output parses back.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        let cells = s.lines().filter(|line| !is_rule_line(line));
        for c in cells.flat_map(str::chars) {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' | '1'..='9' => Square::Empty,
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                other => {
                    return Err(BoardParseError::InvalidCharacter {
                        character: other,
                        cell: squares.len(),
                    });
                }
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self::from_squares(squares))
    }
}

/// A row separator such as `-+-+-`.
fn is_rule_line(line: &str) -> bool {
    let line = line.trim();
    line.contains('+') && line.chars().all(|c| c == '-' || c == '+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_parse_rows() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        assert_eq!(board.count(Mark::X), 4);
        assert_eq!(board.count(Mark::O), 5);
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_parse_empty_markers() {
        let board: Board = "x.o | -_- | 789".parse().unwrap();
        assert_eq!(board.occupied(), 2);
        assert_eq!(board.get(Position::TopRight), Square::Occupied(Mark::O));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!("XOX".parse::<Board>(), Err(BoardParseError::WrongLength(3)));
        assert_eq!(
            "XOXOXOXOXO".parse::<Board>(),
            Err(BoardParseError::WrongLength(10))
        );
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardParseError::InvalidCharacter {
                character: '?',
                cell: 2
            })
        );
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X...O...O".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "XO.-X_O..".parse().unwrap();
        let text = board.display();
        assert_eq!(text.parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_skips_rule_lines_only() {
        let board: Board = "-+-+-\nX|O|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.occupied(), 2);
        // Dashes without a '+' are still empty cells.
        assert_eq!("---\n---\n---".parse::<Board>(), Ok(Board::new()));
    }
}
