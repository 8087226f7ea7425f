//! Tests for config file loading.

use noughts::Config;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_file_overrides() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "log_file = \"game.log\"\nlog_filter = \"debug\"\nshow_cell_numbers = false"
    )
    .expect("write config");

    let config = Config::load_or_default(file.path()).expect("valid config");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.show_cell_numbers());
    assert!(*config.mouse());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "mouse = \"sometimes\"").expect("write config");

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().contains("config.rs"));
}
