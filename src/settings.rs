//! Game settings: play mode and user-configurable preferences.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays O.
///
/// Defaults to [`Mode::TwoPlayer`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Both players are human.
    #[default]
    TwoPlayer,
    /// O is played by the computer.
    VsComputer,
}

impl Mode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoPlayer => "Two players",
            Self::VsComputer => "Vs computer",
        }
    }

    /// Toggles between `TwoPlayer` and `VsComputer`.
    pub fn toggle(self) -> Self {
        match self {
            Self::TwoPlayer => Self::VsComputer,
            Self::VsComputer => Self::TwoPlayer,
        }
    }
}

/// Settings for a game session, usually read from a TOML file.
///
/// ```toml
/// mode = "vs-computer"
/// seed = 42
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Mode the session starts in.
    mode: Mode,

    /// Seed for the computer player. `None` seeds from OS entropy.
    seed: Option<u64>,
}

impl GameSettings {
    /// Creates settings with the given mode and seed.
    pub fn new(mode: Mode, seed: Option<u64>) -> Self {
        Self { mode, seed }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(mode = %settings.mode, seed = ?settings.seed, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Returns a copy with the mode replaced.
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy with the seed replaced.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::TwoPlayer.toggle(), Mode::VsComputer);
        assert_eq!(Mode::VsComputer.toggle(), Mode::TwoPlayer);
    }

    #[test]
    fn test_mode_parses_kebab_case() {
        assert_eq!(Mode::from_str("vs-computer"), Ok(Mode::VsComputer));
        assert_eq!(Mode::from_str("two-player"), Ok(Mode::TwoPlayer));
        assert!(Mode::from_str("solo").is_err());
        assert_eq!(Mode::VsComputer.to_string(), "vs-computer");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = GameSettings::from_toml("").unwrap();
        assert_eq!(settings, GameSettings::default());
        assert_eq!(*settings.mode(), Mode::TwoPlayer);
        assert_eq!(*settings.seed(), None);
    }

    #[test]
    fn test_toml_overrides() {
        let settings = GameSettings::from_toml("mode = \"vs-computer\"\nseed = 7\n").unwrap();
        assert_eq!(*settings.mode(), Mode::VsComputer);
        assert_eq!(*settings.seed(), Some(7));
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let err = GameSettings::from_toml("mode = \"solo\"").unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
        assert!(err.file.ends_with("settings.rs"));
    }
}
