//! Computer player that picks uniformly among empty squares.

use super::MoveSelector;
use crate::games::tictactoe::{Board, Position};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Computer that chooses uniformly at random among empty squares.
///
/// No look-ahead: every empty square is equally likely.
#[derive(Debug, Clone)]
pub struct RandomComputer {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomComputer {
    /// Creates a computer seeded from OS entropy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a computer with a deterministic seed.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a computer seeded from `seed` when present, entropy otherwise.
    pub fn from_seed(name: impl Into<String>, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(name, seed),
            None => Self::new(name),
        }
    }
}

impl Default for RandomComputer {
    fn default() -> Self {
        Self::new("Computer")
    }
}

impl MoveSelector for RandomComputer {
    #[instrument(skip(self, board), fields(ai = %self.name))]
    fn select(&mut self, board: &Board) -> Option<Position> {
        let empty = Position::valid_moves(board);
        let choice = empty.choose(&mut self.rng).copied();
        debug!(candidates = empty.len(), ?choice, "Computer chose position");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
