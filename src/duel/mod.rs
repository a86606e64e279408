//! Human-versus-solver duel
//!
//! Host-side glue around the solver: the human's board, guess validation,
//! lockstep turn triggering with a pacing delay, and the final verdict.

mod board;
mod session;

pub use board::{GuessError, HumanBoard};
pub use session::{DuelConfig, DuelOutcome, DuelSession};
