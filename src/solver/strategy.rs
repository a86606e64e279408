//! Guess selection strategy seam
//!
//! The solver loop only needs "give me a guess for this pool on this turn".
//! [`super::GuessScorer`] is the production implementation.

use super::CandidatePool;
use crate::core::Word;

/// A strategy for choosing the next guess from the candidate pool
pub trait Strategy {
    /// Select the guess for `turn` (0-based)
    ///
    /// Must always produce a word, including for an empty pool.
    fn select_guess(&self, pool: &CandidatePool, turn: usize) -> Word;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn select_guess(&self, pool: &CandidatePool, turn: usize) -> Word {
        (**self).select_guess(pool, turn)
    }
}
