//! Computer players.
//!
//! The session asks a [`MoveSelector`] for O's move in vs-computer mode.

mod random;

pub use random::RandomComputer;

use crate::games::tictactoe::{Board, Position};

/// Trait for computer players that pick a move from the current board.
pub trait MoveSelector {
    /// Picks an empty position, or `None` when the board has no empty square.
    fn select(&mut self, board: &Board) -> Option<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
