//! Wordle feedback calculation and representation
//!
//! Feedback is five per-position statuses aligned with the guess letters:
//! - Absent (gray): letter not available in the secret
//! - Present (yellow): letter in the secret, wrong position
//! - Correct (green): letter in the correct position

use super::word::{WORD_LENGTH, Word, letter_index};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Single-character form used in typed feedback (`G`, `Y`, `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error returned when typed feedback cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol {0:?} (use G, Y or -)")]
    InvalidSymbol(char),
}

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Evaluate `guess` against `secret` using Wordle's duplicate-letter rules
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the secret's
    ///    available letter counts
    /// 2. Second pass: mark the remaining positions present while the letter
    ///    is still available, absent otherwise
    ///
    /// Exact matches must be reserved before any yellow is handed out, or a
    /// repeated guess letter can claim a copy that belongs to a green.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut available = secret.letter_counts();
        let guess = guess.letters();
        let secret = secret.letters();

        // Allow: index pairs guess[i], secret[i] and result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                result[i] = LetterStatus::Correct;
                available[letter_index(guess[i])] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            let count = &mut available[letter_index(guess[i])];
            if *count > 0 {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse feedback typed as "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(len));
        }

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        for (slot, ch) in statuses.iter_mut().zip(s.chars()) {
            *slot = LetterStatus::from_char(ch).ok_or(FeedbackParseError::InvalidSymbol(ch))?;
        }

        Ok(Self(statuses))
    }
}
