//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight fixed triples of positions that wins the game.
///
/// Deserialization only accepts the triples in [`WinningLine::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Position; 3]")]
pub struct WinningLine([Position; 3]);

/// A triple of positions that is not one of the eight winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{:?} is not a winning line", _0)]
pub struct NotAWinningLine(#[error(not(source))] pub [Position; 3]);

impl TryFrom<[Position; 3]> for WinningLine {
    type Error = NotAWinningLine;

    fn try_from(positions: [Position; 3]) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|line| line.0 == positions)
            .ok_or(NotAWinningLine(positions))
    }
}

impl WinningLine {
    /// All winning lines in canonical order: rows, then columns, then diagonals.
    pub const ALL: [WinningLine; 8] = [
        // Rows
        WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
        WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `player` holds all three squares of this line.
    pub fn is_held_by(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|&pos| board.get(pos) == Square::Occupied(player))
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Checks whether `player` has three in a row.
///
/// Lines are scanned in [`WinningLine::ALL`] order and the first complete
/// line is returned, so the reported line is deterministic even on a board
/// no legal game could reach.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> Option<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .find(|line| line.is_held_by(board, player))
}

/// Checks if there is a winner on the board.
///
/// X is checked before O.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    [Player::X, Player::O]
        .into_iter()
        .find_map(|player| check_win(board, player).map(|line| (player, line)))
}
