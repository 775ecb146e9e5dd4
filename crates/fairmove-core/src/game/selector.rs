//! Computer move selection.

use super::MoveList;
use crate::error::GameError;
use rand::seq::SliceRandom;

/// Source of the computer's move for a round.
///
/// Injectable so tests can substitute a deterministic selector. Plain
/// PRNG strength is sufficient here; cryptographic strength is only
/// required for the commitment key.
pub trait MoveSelector {
    /// Choose one move from the list
    fn select<'a>(&mut self, moves: &'a MoveList) -> Result<&'a str, GameError>;
}

/// Uniform random selection over the move list
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSelector;

impl MoveSelector for RandomSelector {
    fn select<'a>(&mut self, moves: &'a MoveList) -> Result<&'a str, GameError> {
        moves
            .tokens()
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .ok_or(GameError::EmptyMoveList)
    }
}
