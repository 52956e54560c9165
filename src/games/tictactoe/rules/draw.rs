//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is a draw: full, with no winning line for either player.
///
/// Callers that have already ruled out a win can use [`is_full`] directly.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
