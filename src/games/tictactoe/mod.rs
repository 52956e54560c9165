mod action;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use invariants::{
    BalancedMarksInvariant, HistoryConsistentInvariant, Invariant, MoveRecord, assert_invariants,
};
pub use position::Position;
pub use rules::{NotAWinningLine, WinningLine, check_draw, check_win, check_winner, is_full};
pub use types::{Board, Player, Square};
