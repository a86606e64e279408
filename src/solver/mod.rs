//! Autonomous Wordle solver
//!
//! Candidate pool, letter-frequency scorer with an opening book, and the
//! turn-by-turn game loop that ties them together.

mod game;
mod opening;
mod pool;
mod scorer;
mod strategy;

pub use game::{
    DEFAULT_PREVIEW_LIMIT, GameStatus, GuessRecord, MAX_ATTEMPTS, SolverError, SolverLoop,
    SolverSnapshot, TurnReport, WinEvent,
};
pub use opening::{DEFAULT_OPENING_BOOK, OpeningBook};
pub use pool::CandidatePool;
pub use scorer::{
    FALLBACK_GUESS, GuessScorer, LetterContribution, LetterFrequencies, ScoringWeights, WordScore,
};
pub use strategy::Strategy;
