//! Word analysis command
//!
//! Explains the heuristic score of a word against the full dictionary.

use crate::core::{Word, WordError};
use crate::solver::{CandidatePool, GuessScorer, LetterFrequencies, WordScore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("word '{0}' not in word list")]
    NotInWordList(Word),
}

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub score: WordScore,
    pub total_candidates: usize,
    /// Number of candidates the scorer would look at
    pub scanned: usize,
    /// 1-based rank among scanned candidates, if the word is scanned at all
    pub rank: Option<usize>,
    /// What the scorer plays on this pool after the first turn
    pub best: Word,
    /// What the scorer opens with on this pool
    pub opening: Word,
    /// Whether the word is one of the scorer's opening-book words
    pub in_opening_book: bool,
}

/// Analyze `word` against `pool`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the pool
pub fn analyze_word(
    word: &str,
    pool: &CandidatePool,
    scorer: &GuessScorer,
) -> Result<AnalysisResult, AnalyzeError> {
    let word = Word::new(word.trim())?;
    if !pool.contains(&word) {
        return Err(AnalyzeError::NotInWordList(word));
    }

    let frequencies = LetterFrequencies::from_pool(pool);
    let score = scorer.explain(&word, &frequencies);

    let scan_limit = scorer.weights().scan_limit;
    let scanned: Vec<&Word> = pool.iter().take(scan_limit).collect();
    let rank = scanned.contains(&&word).then(|| {
        1 + scanned
            .iter()
            .filter(|other| scorer.score(other, &frequencies) > score.score)
            .count()
    });

    Ok(AnalysisResult {
        score,
        total_candidates: pool.len(),
        scanned: scanned.len(),
        rank,
        best: scorer.select_best_guess(pool, 1),
        opening: scorer.select_best_guess(pool, 0),
        in_opening_book: scorer.opening_book().words().contains(&word),
    })
}
