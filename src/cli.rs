//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_session::{ConfigError, GameSettings, Mode};

/// Tic-tac-toe in the terminal
///
/// Type 1-9 to mark a cell, r to reset, m to toggle mode, q to quit.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Play mode (two-player or vs-computer); overrides the settings file
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Seed for the computer player; overrides the settings file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print session events as JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Resolves settings: file values first, then command-line overrides.
    pub fn settings(&self) -> Result<GameSettings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => GameSettings::from_file(path)?,
            None => GameSettings::default(),
        };
        if let Some(mode) = self.mode {
            settings = settings.with_mode(mode);
        }
        if let Some(seed) = self.seed {
            settings = settings.with_seed(seed);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.settings().unwrap(), GameSettings::default());
        assert!(!cli.json);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"two-player\"\nseed = 1").unwrap();
        let path = file.path().to_str().unwrap();

        let cli =
            Cli::try_parse_from(["tictactoe", "--config", path, "--mode", "vs-computer"]).unwrap();
        let settings = cli.settings().unwrap();
        assert_eq!(*settings.mode(), Mode::VsComputer);
        assert_eq!(*settings.seed(), Some(1));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--mode", "solo"]).is_err());
    }
}
