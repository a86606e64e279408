//! Core domain types for Wordle
//!
//! Words and feedback. Everything here is pure and I/O free.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackParseError, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
pub(crate) use word::letter_index;
