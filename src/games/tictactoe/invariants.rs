//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are checked in debug builds after every applied move and can be
//! tested independently.

use super::{Board, Move, Player, Square};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: X's and O's on the board differ by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    #[instrument(skip(board))]
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Marks of X and O differ by at most one"
    }
}

/// A board together with the moves that produced it.
#[derive(Debug, Clone, Copy)]
pub struct MoveRecord<'a> {
    /// The board after every move in `history`.
    pub board: &'a Board,
    /// Moves in play order.
    pub history: &'a [Move],
}

impl<'a> MoveRecord<'a> {
    /// Pairs a board with its move history.
    pub fn new(board: &'a Board, history: &'a [Move]) -> Self {
        Self { board, history }
    }
}

/// Invariant: every move in the history is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<MoveRecord<'_>> for HistoryConsistentInvariant {
    #[instrument(skip(record))]
    fn holds(record: &MoveRecord<'_>) -> bool {
        let filled = record
            .board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        let history_len = record.history.len();
        let placed = record
            .history
            .iter()
            .all(|mov| record.board.get(mov.position) == Square::Occupied(mov.player));

        let valid = filled == history_len && placed;
        if !valid {
            warn!(filled, history_len, placed, "History consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Move history matches the marks on the board"
    }
}

/// Asserts that all board invariants hold (panics on violation in debug builds).
pub fn assert_invariants(board: &Board, history: &[Move]) {
    debug_assert!(
        BalancedMarksInvariant::holds(board),
        "{}",
        BalancedMarksInvariant::description()
    );
    debug_assert!(
        HistoryConsistentInvariant::holds(&MoveRecord::new(board, history)),
        "{}",
        HistoryConsistentInvariant::description()
    );
}
