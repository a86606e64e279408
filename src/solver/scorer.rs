//! Letter-frequency guess scorer
//!
//! Ranks candidates by how common their letters are across the pool, both
//! anywhere in a word and at each exact position. Greedy and deterministic:
//! no randomness, ties go to the lexicographically first word scanned.

use super::{CandidatePool, OpeningBook, Strategy};
use crate::core::{WORD_LENGTH, Word, letter_index as index};
use tracing::{debug, warn};

/// Guess played when the pool has been emptied by inconsistent feedback
pub const FALLBACK_GUESS: Word = match Word::from_static("CRANE") {
    Some(word) => word,
    None => panic!("fallback guess must be a valid word"),
};

/// Tunable constants of the scoring heuristic
///
/// The defaults are empirical; nothing about the solver's correctness
/// depends on their exact values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Weight of the "appears anywhere" frequency
    pub overall_weight: f64,
    /// Weight of the "appears at this position" frequency
    pub positional_weight: f64,
    /// Multiplier for words with repeated letters while the pool is large
    pub repeat_penalty: f64,
    /// Maximum number of candidates scored per turn
    pub scan_limit: usize,
    /// Pool size above which the repeat penalty applies
    pub penalty_threshold: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            overall_weight: 0.4,
            positional_weight: 0.6,
            repeat_penalty: 0.8,
            scan_limit: 100,
            penalty_threshold: 10,
        }
    }
}

/// Letter statistics over a candidate pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies {
    /// Words containing each letter at least once
    overall: [u32; 26],
    /// Words containing each letter at each position
    positional: [[u32; 26]; WORD_LENGTH],
    words: usize,
}

impl LetterFrequencies {
    #[must_use]
    pub fn from_pool(pool: &CandidatePool) -> Self {
        let mut overall = [0u32; 26];
        let mut positional = [[0u32; 26]; WORD_LENGTH];

        for word in pool {
            for (_, letter) in word.distinct_letters() {
                overall[index(letter)] += 1;
            }
            for (position, &letter) in word.letters().iter().enumerate() {
                positional[position][index(letter)] += 1;
            }
        }

        Self {
            overall,
            positional,
            words: pool.len(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn overall(&self, letter: u8) -> u32 {
        self.overall[index(letter)]
    }

    #[inline]
    #[must_use]
    pub const fn positional(&self, position: usize, letter: u8) -> u32 {
        self.positional[position][index(letter)]
    }

    /// Number of words the statistics were computed over
    #[must_use]
    pub const fn words(&self) -> usize {
        self.words
    }
}

/// One distinct letter's share of a word score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterContribution {
    pub letter: u8,
    /// First position of the letter in the word
    pub position: usize,
    pub overall: u32,
    pub positional: u32,
    pub value: f64,
}

/// Full breakdown of a word's heuristic score
#[derive(Debug, Clone, PartialEq)]
pub struct WordScore {
    pub word: Word,
    pub contributions: Vec<LetterContribution>,
    /// Sum of contributions before multipliers
    pub base: f64,
    pub diversity: f64,
    pub penalized: bool,
    pub score: f64,
}

/// Picks the next guess for the solver
#[derive(Debug, Clone)]
pub struct GuessScorer {
    weights: ScoringWeights,
    opening_book: OpeningBook,
    fallback: Word,
}

impl GuessScorer {
    #[must_use]
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            opening_book: OpeningBook::default(),
            fallback: FALLBACK_GUESS,
        }
    }

    #[must_use]
    pub fn with_opening_book(mut self, opening_book: OpeningBook) -> Self {
        self.opening_book = opening_book;
        self
    }

    #[must_use]
    pub const fn with_fallback(mut self, fallback: Word) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    #[must_use]
    pub const fn opening_book(&self) -> &OpeningBook {
        &self.opening_book
    }

    /// Choose the guess for `turn` (0-based) from the current pool
    ///
    /// - empty pool: the fallback guess
    /// - one candidate: that candidate
    /// - first turn: the first opening-book word still in the pool
    /// - otherwise: the best-scoring word among the first `scan_limit`
    ///   candidates
    #[must_use]
    pub fn select_best_guess(&self, pool: &CandidatePool, turn: usize) -> Word {
        match pool.as_slice() {
            [] => {
                warn!(fallback = %self.fallback, "candidate pool is empty, using fallback guess");
                return self.fallback;
            }
            [only] => return *only,
            _ => {}
        }

        if turn == 0
            && let Some(opening) = self.opening_book.first_in(pool)
        {
            debug!(%opening, "opening book guess");
            return opening;
        }

        let frequencies = LetterFrequencies::from_pool(pool);
        let mut best: Option<(Word, f64)> = None;

        for &word in pool.iter().take(self.weights.scan_limit) {
            let score = self.score(&word, &frequencies);
            // Strictly greater: the first word scanned wins a tie
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }

        best.map_or(self.fallback, |(word, score)| {
            debug!(%word, score, scanned = pool.len().min(self.weights.scan_limit), "scored guess");
            word
        })
    }

    /// Heuristic score of `word` against the given pool statistics
    #[must_use]
    pub fn score(&self, word: &Word, frequencies: &LetterFrequencies) -> f64 {
        self.explain(word, frequencies).score
    }

    /// Score with per-letter breakdown
    #[must_use]
    pub fn explain(&self, word: &Word, frequencies: &LetterFrequencies) -> WordScore {
        let contributions: Vec<LetterContribution> = word
            .distinct_letters()
            .map(|(position, letter)| {
                let overall = frequencies.overall(letter);
                let positional = frequencies.positional(position, letter);
                LetterContribution {
                    letter,
                    position,
                    overall,
                    positional,
                    value: f64::from(overall) * self.weights.overall_weight
                        + f64::from(positional) * self.weights.positional_weight,
                }
            })
            .collect();

        let base: f64 = contributions.iter().map(|c| c.value).sum();
        let distinct = contributions.len();
        let diversity = distinct as f64 / WORD_LENGTH as f64;
        let penalized =
            frequencies.words() > self.weights.penalty_threshold && distinct < WORD_LENGTH;

        let mut score = base * diversity;
        if penalized {
            score *= self.weights.repeat_penalty;
        }

        WordScore {
            word: *word,
            contributions,
            base,
            diversity,
            penalized,
            score,
        }
    }
}

impl Default for GuessScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl Strategy for GuessScorer {
    fn select_guess(&self, pool: &CandidatePool, turn: usize) -> Word {
        self.select_best_guess(pool, turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn pool(words: &[&str]) -> CandidatePool {
        CandidatePool::new(words_from_slice(words))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn empty_pool_returns_fallback() {
        let scorer = GuessScorer::default();
        assert_eq!(scorer.select_best_guess(&CandidatePool::default(), 3), FALLBACK_GUESS);

        let custom = GuessScorer::default().with_fallback(word("adieu"));
        assert_eq!(custom.select_best_guess(&CandidatePool::default(), 0), word("adieu"));
    }

    #[test]
    fn single_candidate_returned_immediately() {
        let scorer = GuessScorer::default();
        assert_eq!(scorer.select_best_guess(&pool(&["zebra"]), 0), word("zebra"));
        assert_eq!(scorer.select_best_guess(&pool(&["zebra"]), 4), word("zebra"));
    }

    #[test]
    fn opening_book_wins_on_first_turn_only() {
        let scorer = GuessScorer::default();
        let pool = pool(&["eerie", "salet", "tease", "setae", "easel"]);

        assert_eq!(scorer.select_best_guess(&pool, 0), word("salet"));
        // Later turns score normally; the choice just has to come from the pool
        assert!(pool.contains(&scorer.select_best_guess(&pool, 1)));
    }

    #[test]
    fn first_turn_scores_when_book_absent() {
        let scorer = GuessScorer::default().with_opening_book(OpeningBook::empty());
        let pool = pool(&["aaaaa", "abcde"]);
        // Diversity multiplier makes the five-letter word strictly better
        assert_eq!(scorer.select_best_guess(&pool, 0), word("abcde"));
    }

    #[test]
    fn frequencies_count_distinct_letters_once() {
        let frequencies = LetterFrequencies::from_pool(&pool(&["llama", "allow"]));
        assert_eq!(frequencies.overall(b'L'), 2);
        assert_eq!(frequencies.overall(b'A'), 2);
        assert_eq!(frequencies.overall(b'W'), 1);
        assert_eq!(frequencies.positional(0, b'L'), 1);
        assert_eq!(frequencies.positional(1, b'L'), 2);
        assert_eq!(frequencies.positional(4, b'A'), 1);
        assert_eq!(frequencies.words(), 2);
    }

    #[test]
    fn score_formula() {
        let scorer = GuessScorer::default();
        let frequencies = LetterFrequencies::from_pool(&pool(&["llama", "allow"]));

        // ALLOW: A(0): 2×0.4 + 1×0.6, L(1): 2×0.4 + 2×0.6,
        //        O(3): 1×0.4 + 1×0.6, W(4): 1×0.4 + 1×0.6
        // base 5.4, four distinct letters, pool too small for the penalty
        let explained = scorer.explain(&word("allow"), &frequencies);
        assert_eq!(explained.contributions.len(), 4);
        assert!((explained.base - 5.4).abs() < 1e-9);
        assert!(!explained.penalized);
        assert!((explained.score - 5.4 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn repeat_penalty_applies_to_large_pools() {
        let scorer = GuessScorer::default();
        let words = [
            "allow", "llama", "crane", "slate", "grate", "irate", "trace", "brave", "grape",
            "shape", "zebra",
        ];
        let frequencies = LetterFrequencies::from_pool(&pool(&words));

        let repeated = scorer.explain(&word("allow"), &frequencies);
        assert!(repeated.penalized);
        let expected = repeated.base * 0.8 * 0.8;
        assert!((repeated.score - expected).abs() < 1e-9);

        assert!(!scorer.explain(&word("crane"), &frequencies).penalized);
    }

    #[test]
    fn repeat_penalty_needs_more_than_threshold_words() {
        let scorer = GuessScorer::default();
        let mut words = vec![
            "allow", "llama", "crane", "slate", "grate", "irate", "trace", "brave", "grape",
            "shape",
        ];
        let at_threshold = LetterFrequencies::from_pool(&pool(&words));
        assert_eq!(at_threshold.words(), scorer.weights().penalty_threshold);

        let exact = scorer.explain(&word("allow"), &at_threshold);
        assert!(!exact.penalized);
        assert!((exact.score - exact.base * 0.8).abs() < 1e-9);

        words.push("zebra");
        let above = LetterFrequencies::from_pool(&pool(&words));
        assert!(scorer.explain(&word("allow"), &above).penalized);
    }

    #[test]
    fn ties_go_to_first_scanned() {
        // Disjoint letters give ABCDE and FGHIJ identical scores, so the
        // lexicographically first one wins
        let scorer = GuessScorer::default();
        let pool = pool(&["fghij", "abcde"]);
        assert_eq!(scorer.select_best_guess(&pool, 2), word("abcde"));
    }

    #[test]
    fn scan_limit_bounds_candidates() {
        let weights = ScoringWeights {
            scan_limit: 1,
            ..ScoringWeights::default()
        };
        let scorer = GuessScorer::new(weights);
        // Only the lexicographically first word is scanned
        let pool = pool(&["aaaab", "crane", "slate"]);
        assert_eq!(scorer.select_best_guess(&pool, 1), word("aaaab"));
    }

    #[test]
    fn selection_is_deterministic() {
        let scorer = GuessScorer::default();
        let pool = pool(&["crane", "slate", "grate", "irate", "trace", "brave"]);
        let first = scorer.select_best_guess(&pool, 2);
        for _ in 0..5 {
            assert_eq!(scorer.select_best_guess(&pool, 2), first);
        }
    }
}
