//! Wordle word representation
//!
//! A Word is five uppercase ASCII letters. Input is normalized to uppercase
//! at construction, so equality and hashing see a single canonical form.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
///
/// Ordering is lexicographic over the letters, which is what the candidate
/// pool relies on for a reproducible scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Contains non-ASCII characters
    /// - Length is not exactly 5
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        // ASCII, so bytes and characters agree
        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            if !byte.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self { letters })
    }

    /// Const constructor for word literals
    ///
    /// Returns `None` unless `text` is exactly five ASCII letters.
    #[must_use]
    pub const fn from_static(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return None;
        }

        let mut letters = [0u8; WORD_LENGTH];
        let mut i = 0;
        while i < WORD_LENGTH {
            if !bytes[i].is_ascii_alphabetic() {
                return None;
            }
            letters[i] = bytes[i].to_ascii_uppercase();
            i += 1;
        }

        Some(Self { letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction only admits ASCII letters
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Occurrence count of each letter, indexed `A = 0 .. Z = 25`
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.letters {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    /// Each distinct letter paired with the position of its first occurrence
    pub fn distinct_letters(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(|&(i, letter)| !self.letters[..i].contains(letter))
            .map(|(i, &letter)| (i, letter))
    }
}

/// Alphabet index of an uppercase ASCII letter
#[inline]
#[must_use]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
