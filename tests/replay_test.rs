//! Tests for the headless replay and evaluation commands.

use noughts::replay::{evaluate_board, parse_moves, replay};

fn run_replay(moves: &[usize], json: bool) -> String {
    let mut out = Vec::new();
    replay(moves, json, &mut out).expect("replay succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_replay_text_output() {
    let output = run_replay(&[0, 3, 1, 4, 2], false);
    assert_eq!(
        output,
        "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nPlayer X wins!\n"
    );
}

#[test]
fn test_replay_skips_stale_and_out_of_range() {
    let output = run_replay(&[4, 4, 12, 0], false);
    assert_eq!(output, "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9\n\nPlayer X's turn\n");
}

#[test]
fn test_replay_json_output() {
    let output = run_replay(&[4, 0], true);
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(value["to_move"], "X");
    assert_eq!(value["outcome"], "InProgress");
    assert_eq!(value["winning_line"], serde_json::Value::Null);
    assert_eq!(value["history"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_parse_then_replay() {
    let moves = parse_moves("0 1 2 4 3 5 7 6 8").expect("valid list");
    let output = run_replay(&moves, false);
    assert!(output.ends_with("It's a draw!\n"));
}

#[test]
fn test_replay_by_label_matches_indices() {
    let moves = parse_moves("center top-left bottom-right").expect("valid list");
    assert_eq!(run_replay(&moves, false), run_replay(&[4, 0, 8], false));
}

#[test]
fn test_printed_board_evaluates_back() {
    let printed = run_replay(&[0, 3, 1, 4, 2], false);
    let board_text = printed.split("\n\n").next().expect("board section");

    let mut out = Vec::new();
    evaluate_board(board_text, &mut out).expect("printed board parses");
    let output = String::from_utf8(out).expect("utf-8 output");
    assert!(output.starts_with(board_text));
    assert!(output.contains("Player X wins"));
    assert!(output.contains("Line: Top-left, Top-center, Top-right"));
}

#[test]
fn test_evaluate_board_output() {
    let mut out = Vec::new();
    evaluate_board("XXO/XO./O..", &mut out).expect("valid board");
    let output = String::from_utf8(out).expect("utf-8 output");
    assert!(output.contains("Player O wins"));
    assert!(output.contains("Line: Top-right, Center, Bottom-left"));
}

#[test]
fn test_evaluate_board_draw() {
    let mut out = Vec::new();
    evaluate_board("XOX OXO OXO", &mut out).expect("valid board");
    let output = String::from_utf8(out).expect("utf-8 output");
    assert!(output.contains("Draw"));
    assert!(!output.contains("Line:"));
}

#[test]
fn test_evaluate_board_rejects_bad_input() {
    let mut out = Vec::new();
    let err = evaluate_board("XO", &mut out).unwrap_err();
    assert!(format!("{:#}", err).contains("expected 9 cells, found 2"));
}
