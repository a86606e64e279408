//! Word solving command
//!
//! Runs the solver against a fixed secret and returns the solution path.

use crate::core::{Feedback, Word, WordError};
use crate::solver::{GameStatus, SolverError, SolverLoop, Strategy};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
    /// Whether the target was a dictionary word at all
    pub in_dictionary: bool,
}

/// A single guess step in the solution
#[derive(Debug, Clone, Copy)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `target` from scratch with the given solver
///
/// # Errors
///
/// Returns an error if the target is not a valid 5-letter word.
pub fn solve_word<S: Strategy>(
    target: &str,
    solver: &mut SolverLoop<S>,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(target.trim())?;
    let in_dictionary = solver.dictionary().contains(&target);

    solver.start(target);

    let mut guesses = Vec::new();
    loop {
        let report = solver.take_turn()?;
        guesses.push(GuessStep {
            word: report.record.guess,
            feedback: report.record.feedback,
            candidates_before: report.record.candidates_before,
            candidates_after: report.remaining,
        });

        if report.status.is_terminal() {
            return Ok(SolveResult {
                success: report.status == GameStatus::Won,
                guesses,
                target,
                in_dictionary,
            });
        }
    }
}
