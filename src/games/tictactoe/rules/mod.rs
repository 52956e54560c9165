//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the session controller can consult them after each move.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_full};
pub use win::{NotAWinningLine, WinningLine, check_win, check_winner};
