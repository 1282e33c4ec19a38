//! Tests for loading game configuration files.

use std::io::Write;
use veiled_games::GameConfig;
use veiled_tictactoe::Mark;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
        reveal_turns = [6, 7]
        prefer_center_through_turn = 5
        cpu_grid_reveal_from_turn = 7
        human_mark = "cross"
        human_moves_first = false
        think_delay_ms = 0
        reveal_delay_ms = 250
        seed = 42
        "#,
    );
    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.human_mark(), Mark::Cross);
    assert!(!*config.human_moves_first());
    assert_eq!(*config.selector_policy().prefer_center_through_turn(), 5);
    assert_eq!(config.reveal_policy().reveal_turns(), &vec![6, 7]);
    assert_eq!(*config.reveal_policy().cpu_grid_reveal_from_turn(), 7);
    assert_eq!(config.reveal_delay().as_millis(), 250);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let err = GameConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let file = write_config("reveal_turns = \"soon\"");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_turn_zero_is_rejected() {
    let file = write_config("reveal_turns = [0]");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("turns start at 1"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_unknown_mark_is_an_error() {
    let file = write_config("human_mark = \"triangle\"");
    assert!(GameConfig::from_file(file.path()).is_err());
}
