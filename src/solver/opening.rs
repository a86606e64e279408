//! Opening book
//!
//! A fixed, ordered list of strong first guesses. On the first turn the
//! first book word still in the pool is played without scoring.

use super::CandidatePool;
use crate::core::Word;
use crate::wordlists::loader::words_from_slice;

/// Default opening book, strongest first
pub const DEFAULT_OPENING_BOOK: &[&str] = &[
    "SALET", "CRANE", "SLATE", "TRACE", "CRATE", "SLANT", "CARTE", "ROATE", "RAISE", "ARISE",
    "IRATE", "STARE",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningBook {
    words: Vec<Word>,
}

impl OpeningBook {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Book with no entries; the scorer then scores the first turn too
    #[must_use]
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// First book word that is still a candidate
    #[must_use]
    pub fn first_in(&self, pool: &CandidatePool) -> Option<Word> {
        self.words.iter().copied().find(|w| pool.contains(w))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self::new(words_from_slice(DEFAULT_OPENING_BOOK))
    }
}
