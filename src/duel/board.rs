//! The human player's board

use crate::core::{Feedback, Word, WordError};
use crate::solver::{GameStatus, MAX_ATTEMPTS};
use thiserror::Error;

/// Why a human guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("no game in progress, start a new one first")]
    NotStarted,
    #[error(transparent)]
    Invalid(#[from] WordError),
    #[error("{0} is not in the word list")]
    NotInWordList(Word),
    #[error("your game is already over")]
    GameOver,
}

/// Rows guessed by the human against the shared secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanBoard {
    rows: Vec<(Word, Feedback)>,
    status: GameStatus,
}

impl HumanBoard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
        }
    }

    /// Score a guess and record it
    ///
    /// # Errors
    /// Returns [`GuessError::GameOver`] once the board is won or lost.
    pub fn submit(&mut self, guess: Word, secret: &Word) -> Result<Feedback, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::GameOver);
        }

        let feedback = Feedback::evaluate(&guess, secret);
        self.rows.push((guess, feedback));

        if feedback.is_solved() {
            self.status = GameStatus::Won;
        } else if self.rows.len() == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        Ok(feedback)
    }

    #[must_use]
    pub fn rows(&self) -> &[(Word, Feedback)] {
        &self.rows
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }
}

impl Default for HumanBoard {
    fn default() -> Self {
        Self::new()
    }
}
