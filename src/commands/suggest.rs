//! Suggest command
//!
//! Replays rows from a game played elsewhere and proposes the next guess.

use crate::core::{Feedback, FeedbackParseError, Word, WordError};
use crate::solver::{CandidatePool, DEFAULT_PREVIEW_LIMIT, MAX_ATTEMPTS, Strategy};
use std::str::FromStr;
use thiserror::Error;

/// Why a typed row could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("expected GUESS:FEEDBACK (e.g. salet:-Y--G), got {0:?}")]
    MissingSeparator(String),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Feedback(#[from] FeedbackParseError),
}

/// A guess and the feedback the game showed for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackRow {
    pub guess: Word,
    pub feedback: Feedback,
}

impl FromStr for FeedbackRow {
    type Err = RowParseError;

    /// Parse `salet:-Y--G` (feedback may also be typed as emoji)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once(':')
            .ok_or_else(|| RowParseError::MissingSeparator(s.to_string()))?;
        Ok(Self {
            guess: guess.trim().parse()?,
            feedback: feedback.parse()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("a game has at most {max} rows, got {0}", max = MAX_ATTEMPTS)]
    TooManyRows(usize),
    #[error("{0} already solved the puzzle")]
    AlreadySolved(Word),
}

/// Next move after replaying the typed rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestResult {
    /// 0-based turn the suggestion is for
    pub turn: usize,
    pub remaining: usize,
    /// Remaining words when there are few enough to list
    pub preview: Option<Vec<Word>>,
    pub suggestion: Word,
}

/// Filter `dictionary` by every row and ask `strategy` for the next guess
///
/// A pool emptied by inconsistent feedback still yields the strategy's
/// fallback guess, with `remaining == 0`.
///
/// # Errors
///
/// Returns an error if the rows already fill the board or one of them is
/// a solved row.
pub fn suggest_next<S: Strategy>(
    rows: &[FeedbackRow],
    dictionary: &CandidatePool,
    strategy: &S,
) -> Result<SuggestResult, SuggestError> {
    if let Some(row) = rows.iter().find(|row| row.feedback.is_solved()) {
        return Err(SuggestError::AlreadySolved(row.guess));
    }
    if rows.len() >= MAX_ATTEMPTS {
        return Err(SuggestError::TooManyRows(rows.len()));
    }

    let mut pool = dictionary.clone();
    for row in rows {
        pool.filter(&row.guess, row.feedback);
    }

    let turn = rows.len();
    Ok(SuggestResult {
        turn,
        remaining: pool.len(),
        preview: pool.preview(DEFAULT_PREVIEW_LIMIT).map(<[Word]>::to_vec),
        suggestion: strategy.select_guess(&pool, turn),
    })
}
