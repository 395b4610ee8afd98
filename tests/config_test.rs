//! Tests for loading engine configuration from disk.

use std::io::Write;
use std::time::Duration;
use tictactoe_duel::{EngineConfig, GameMode, MoveValidation, PlayerKind};

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
computer_delay_ms = 250
move_validation = "strict"
seed = 99
player_one_name = "Alice"
computer_name = "Robot"
"#
    )
    .unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();

    assert_eq!(config.computer_delay(), Duration::from_millis(250));
    assert_eq!(*config.move_validation(), MoveValidation::Strict);
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(config.player_two_name(), "player 2");

    let (first, second) = GameMode::Computer.seats(&config);
    assert_eq!(first.name(), "Alice");
    assert_eq!(second.name(), "Robot");
    assert_eq!(*second.kind(), PlayerKind::Computer);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_validation_value_is_config_error() {
    let err = EngineConfig::from_toml(r#"move_validation = "lenient""#).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
