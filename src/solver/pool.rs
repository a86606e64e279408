//! Candidate pool
//!
//! The set of words still consistent with every piece of feedback seen so
//! far. Stored sorted and de-duplicated so iteration order is lexicographic
//! and reproducible.

use crate::core::{Feedback, Word};

/// Words that may still be the secret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Build a pool from any collection of words, dropping duplicates
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Pool with no words
    #[must_use]
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Keep only words that would have produced `feedback` for `guess`
    ///
    /// Consistency filtering: a word survives only when evaluating `guess`
    /// against it reproduces the observed feedback at all five positions.
    /// Returns the number of words removed.
    pub fn filter(&mut self, guess: &Word, feedback: Feedback) -> usize {
        let before = self.words.len();
        self.words
            .retain(|candidate| Feedback::evaluate(guess, candidate) == feedback);
        before - self.words.len()
    }

    /// Non-mutating variant of [`CandidatePool::filter`]
    #[must_use]
    pub fn filtered(&self, guess: &Word, feedback: Feedback) -> Self {
        Self {
            words: self
                .words
                .iter()
                .filter(|candidate| Feedback::evaluate(guess, candidate) == feedback)
                .copied()
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Words in lexicographic order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    /// The remaining words, but only when there are at most `limit` of them
    #[must_use]
    pub fn preview(&self, limit: usize) -> Option<&[Word]> {
        (self.words.len() <= limit).then_some(self.words.as_slice())
    }
}

impl FromIterator<Word> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
