//! Output notifications from a game session to its front end.
//!
//! The session never touches presentation directly. Every visible change
//! is reported through [`SessionObserver`], so the same engine can drive a
//! terminal, a GUI, or a test recorder.

use crate::games::tictactoe::{Player, Position, WinningLine};
use crate::settings::Mode;
use serde::{Deserialize, Serialize};

/// Highlight style for a completed winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinHighlight {
    /// X won.
    Player1,
    /// O won in two-player mode.
    Player2,
    /// O won in vs-computer mode.
    Computer,
}

impl WinHighlight {
    /// Picks the highlight for `winner` under `mode`.
    pub fn for_winner(winner: Player, mode: Mode) -> Self {
        match (winner, mode) {
            (Player::X, _) => Self::Player1,
            (Player::O, Mode::TwoPlayer) => Self::Player2,
            (Player::O, Mode::VsComputer) => Self::Computer,
        }
    }
}

/// Receiver of session notifications.
///
/// All methods default to doing nothing, so implementors only override
/// what they render.
pub trait SessionObserver {
    /// A mark was placed.
    fn on_cell_changed(&mut self, _position: Position, _player: Player) {}

    /// The status line changed.
    fn on_status_changed(&mut self, _message: &str) {}

    /// `player` completed `line`.
    fn on_win(&mut self, _line: WinningLine, _player: Player, _highlight: WinHighlight) {}

    /// The board filled up with no winner.
    fn on_draw(&mut self) {}

    /// The board was cleared; any winning-line overlay must be removed.
    fn on_reset(&mut self) {}

    /// The play mode changed.
    fn on_mode_changed(&mut self, _mode: Mode) {}
}

/// Observer that ignores every notification.
impl SessionObserver for () {}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// See [`SessionObserver::on_cell_changed`].
    CellChanged {
        /// Board index 0-8.
        index: usize,
        /// Mark placed.
        player: Player,
    },
    /// See [`SessionObserver::on_status_changed`].
    StatusChanged {
        /// New status text.
        message: String,
    },
    /// See [`SessionObserver::on_win`].
    Win {
        /// Board indices of the winning line.
        line: [usize; 3],
        /// Winner.
        player: Player,
        /// Highlight style.
        highlight: WinHighlight,
    },
    /// See [`SessionObserver::on_draw`].
    Draw,
    /// See [`SessionObserver::on_reset`].
    Reset,
    /// See [`SessionObserver::on_mode_changed`].
    ModeChanged {
        /// New mode.
        mode: Mode,
    },
}

/// Observer that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<SessionEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

impl SessionObserver for EventLog {
    fn on_cell_changed(&mut self, position: Position, player: Player) {
        self.events.push(SessionEvent::CellChanged {
            index: position.to_index(),
            player,
        });
    }

    fn on_status_changed(&mut self, message: &str) {
        self.events.push(SessionEvent::StatusChanged {
            message: message.to_string(),
        });
    }

    fn on_win(&mut self, line: WinningLine, player: Player, highlight: WinHighlight) {
        self.events.push(SessionEvent::Win {
            line: line.indices(),
            player,
            highlight,
        });
    }

    fn on_draw(&mut self) {
        self.events.push(SessionEvent::Draw);
    }

    fn on_reset(&mut self) {
        self.events.push(SessionEvent::Reset);
    }

    fn on_mode_changed(&mut self, mode: Mode) {
        self.events.push(SessionEvent::ModeChanged { mode });
    }
}
