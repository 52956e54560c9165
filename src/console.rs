//! Line-oriented terminal front end.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_session::{EventLog, GameSession, MoveSelector, SessionEvent};
use tracing::{debug, instrument};

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Mark a cell (board index 0-8).
    Cell(usize),
    /// Start a new game.
    Reset,
    /// Switch between two-player and vs-computer.
    ToggleMode,
    /// Leave.
    Quit,
}

impl Input {
    /// Parses a line. Cells are numbered 1-9 on screen.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "r" | "reset" => Some(Self::Reset),
            "m" | "mode" => Some(Self::ToggleMode),
            "q" | "quit" => Some(Self::Quit),
            other => match other.parse::<usize>() {
                Ok(n @ 1..=9) => Some(Self::Cell(n - 1)),
                _ => None,
            },
        }
    }
}

const HELP: &str = "Commands: 1-9 mark a cell, r reset, m toggle mode, q quit";

/// Runs the read-eval-print loop until `q` or end of input.
#[instrument(skip(session, input, out))]
pub fn run<S, R, W>(session: &mut GameSession<S>, input: R, mut out: W, json: bool) -> Result<()>
where
    S: MoveSelector,
    R: BufRead,
    W: Write,
{
    let mut log = EventLog::new();

    writeln!(out, "Mode: {}", session.mode().label())?;
    writeln!(out, "{}\n", session.board())?;
    writeln!(out, "{}", session.status_message())?;

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = Input::parse(&line) else {
            writeln!(out, "{}", HELP)?;
            continue;
        };
        debug!(?cmd, "Input");

        match cmd {
            Input::Cell(index) => session.select_cell(index, &mut log),
            Input::Reset => session.reset(&mut log),
            Input::ToggleMode => session.set_mode(session.mode().toggle(), &mut log),
            Input::Quit => break,
        }

        render(&mut out, session, log.drain(), json)?;
    }

    out.flush()?;
    Ok(())
}

fn render<S: MoveSelector, W: Write>(
    out: &mut W,
    session: &GameSession<S>,
    events: Vec<SessionEvent>,
    json: bool,
) -> Result<()> {
    if json {
        for event in &events {
            writeln!(out, "{}", serde_json::to_string(event)?)?;
        }
        return Ok(());
    }

    if events.is_empty() {
        return Ok(());
    }

    for event in &events {
        match event {
            SessionEvent::Win { line, .. } => writeln!(out, "Winning line: {:?}", line)?,
            SessionEvent::ModeChanged { mode } => writeln!(out, "Mode: {}", mode.label())?,
            _ => {}
        }
    }
    writeln!(out, "\n{}\n", session.board())?;
    writeln!(out, "{}", session.status_message())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_session::{Mode, Phase, Player};

    #[test]
    fn test_parse_inputs() {
        assert_eq!(Input::parse("1"), Some(Input::Cell(0)));
        assert_eq!(Input::parse(" 9 "), Some(Input::Cell(8)));
        assert_eq!(Input::parse("0"), None);
        assert_eq!(Input::parse("10"), None);
        assert_eq!(Input::parse("R"), Some(Input::Reset));
        assert_eq!(Input::parse("mode"), Some(Input::ToggleMode));
        assert_eq!(Input::parse("q"), Some(Input::Quit));
        assert_eq!(Input::parse("hello"), None);
    }

    #[test]
    fn test_run_plays_to_win() {
        let mut session = GameSession::new();
        let mut out = Vec::new();
        run(&mut session, Cursor::new("1\n5\n2\n6\n3\nq\n"), &mut out, false).unwrap();

        assert!(matches!(session.phase(), Phase::Won { winner: Player::X, .. }));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Winning line: [0, 1, 2]"));
        assert!(text.trim_end().ends_with("Player X wins!"));
    }

    #[test]
    fn test_run_json_output() {
        let mut session = GameSession::new();
        let mut out = Vec::new();
        run(&mut session, Cursor::new("m\n"), &mut out, true).unwrap();

        assert_eq!(session.mode(), Mode::VsComputer);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#"{"event":"reset"}"#));
        assert!(text.contains(r#"{"event":"mode_changed","mode":"vs-computer"}"#));
    }

    #[test]
    fn test_run_prints_help_for_garbage() {
        let mut session = GameSession::new();
        let mut out = Vec::new();
        run(&mut session, Cursor::new("xyz\n"), &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(HELP));
    }
}
