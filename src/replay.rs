//! Headless commands: replay a click sequence or evaluate a board.

use crate::shell::{Shell, status_line};
use anyhow::{Context, Result};
use derive_more::Display;
use noughts_core::{Board, IgnoredMove, MoveReport, Position, evaluate, winning_line};
use std::io::Write;
use tracing::{info, instrument, warn};

/// Error returned for a malformed move list.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("invalid move {:?}: expected a cell index or label", _0)]
pub struct MoveListError(pub String);

impl std::error::Error for MoveListError {}

/// Parses a comma or whitespace separated list of cells.
///
/// Each token is a cell index or a position label such as `center` or
/// `top-l`. Range is not checked on numbers; out-of-range indices reach the
/// game and are ignored like any stale click.
#[instrument]
pub fn parse_moves(s: &str) -> Result<Vec<usize>, MoveListError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_move)
        .collect()
}

fn parse_move(token: &str) -> Result<usize, MoveListError> {
    if let Ok(index) = token.parse::<usize>() {
        return Ok(index);
    }
    token
        .parse::<Position>()
        .map(Position::to_index)
        .map_err(|_| MoveListError(token.to_string()))
}

/// Applies `moves` to a fresh session and writes the result.
#[instrument(skip(out))]
pub fn replay(moves: &[usize], json: bool, out: &mut impl Write) -> Result<()> {
    let mut shell = Shell::new();
    for &index in moves {
        if let MoveReport::Ignored(IgnoredMove::OutOfRange(_)) = shell.notify_click(index) {
            warn!(index, "Skipping index outside the board");
        }
    }

    let view = shell.view();
    info!(outcome = %view.outcome, plies = view.history.len(), "Replay finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &view).context("Failed to write snapshot")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", view.board.display())?;
        writeln!(out)?;
        writeln!(out, "{}", shell.status_line())?;
    }
    Ok(())
}

/// Parses `text` as a board and writes its outcome.
#[instrument(skip(out))]
pub fn evaluate_board(text: &str, out: &mut impl Write) -> Result<()> {
    let board: Board = text.parse().context("Failed to parse board")?;
    let outcome = evaluate(&board);

    writeln!(out, "{}", board.display())?;
    writeln!(out)?;
    writeln!(out, "{}", outcome)?;
    if let Some(line) = winning_line(&board) {
        let labels: Vec<&str> = line.iter().map(|p| p.label()).collect();
        writeln!(out, "Line: {}", labels.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves_separators() {
        assert_eq!(parse_moves("0,3, 1 4\t2"), Ok(vec![0, 3, 1, 4, 2]));
        assert_eq!(parse_moves(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_moves_rejects_garbage() {
        assert_eq!(parse_moves("0,x"), Err(MoveListError("x".to_string())));
        assert_eq!(parse_moves("-1"), Err(MoveListError("-1".to_string())));
    }

    #[test]
    fn test_parse_moves_accepts_labels() {
        assert_eq!(
            parse_moves("top-left, middle-l top-c center,top-right"),
            Ok(vec![0, 3, 1, 4, 2])
        );
        assert_eq!(parse_moves("12 Center"), Ok(vec![12, 4]));
    }
}
