//! Tests for loading game settings from disk.

use std::io::Write;
use tictactoe_session::{GameSession, GameSettings, Mode, Player};

#[test]
fn test_load_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"vs-computer\"").unwrap();
    writeln!(file, "seed = 1234").unwrap();

    let settings = GameSettings::from_file(file.path()).unwrap();
    assert_eq!(*settings.mode(), Mode::VsComputer);
    assert_eq!(*settings.seed(), Some(1234));
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameSettings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let settings = GameSettings::new(Mode::VsComputer, Some(99));
    let mut a = GameSession::from_settings(&settings);
    let mut b = GameSession::from_settings(&settings);

    for _ in 0..3 {
        let Some(Player::X) = a.to_move() else { break };
        let next = a.board().empty_positions()[0].to_index();
        a.select_cell(next, &mut ());
        b.select_cell(next, &mut ());
        assert_eq!(a.board(), b.board());
    }
    assert_eq!(a.history(), b.history());
}

#[test]
fn test_session_starts_in_configured_mode() {
    let settings = GameSettings::from_toml("mode = \"vs-computer\"").unwrap();
    let session = GameSession::from_settings(&settings);
    assert_eq!(session.mode(), Mode::VsComputer);
}
