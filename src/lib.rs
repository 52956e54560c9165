//! Tic-tac-toe session engine.
//!
//! A 3x3 game for two players or one player against a random computer
//! opponent, with presentation decoupled behind an observer interface.
//!
//! # Architecture
//!
//! - **Board / rules**: board state, positions, win and draw detection
//! - **Session**: the turn controller that accepts input events
//! - **Players**: computer move selection
//! - **Observer**: notifications to whatever renders the game
//! - **Settings**: play mode and TOML configuration
//!
//! # Example
//!
//! ```
//! use tictactoe_session::{EventLog, GameSession, Phase, Player};
//!
//! let mut session = GameSession::new();
//! let mut ui = EventLog::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     session.select_cell(cell, &mut ui);
//! }
//! assert!(matches!(session.phase(), Phase::Won { winner: Player::X, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
mod observer;
mod players;
mod session;
mod settings;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BalancedMarksInvariant, Board, HistoryConsistentInvariant, Invariant, Move, MoveError, MoveRecord,
    NotAWinningLine, Player, Position, Square, WinningLine, check_draw, check_win, check_winner, is_full,
};

// Crate-level exports - Session management
pub use session::{GameSession, Phase};

// Crate-level exports - Observer
pub use observer::{EventLog, SessionEvent, SessionObserver, WinHighlight};

// Crate-level exports - Computer players
pub use players::{MoveSelector, RandomComputer};

// Crate-level exports - Settings
pub use settings::{ConfigError, GameSettings, Mode};
