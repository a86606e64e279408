//! Word lists for Wordle
//!
//! Embedded lists compiled into the binary, file loading, and the
//! [`WordBank`] the host hands to the solver.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordBankSource};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, FALLBACK_WORDS};
