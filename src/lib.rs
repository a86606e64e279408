//! Wordle Duel
//!
//! A Wordle solver driven by letter-frequency heuristics, and a duel mode
//! where a human races it on the same hidden word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_duel::core::{Feedback, Word};
//! use wordle_duel::solver::{GameStatus, GuessScorer, SolverLoop};
//! use wordle_duel::wordlists::WordBank;
//!
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("react").unwrap();
//! assert_eq!(Feedback::evaluate(&guess, &secret).to_string(), "YYG-Y");
//!
//! let bank = WordBank::embedded();
//! let mut solver = SolverLoop::new(GuessScorer::default(), bank.dictionary()).unwrap();
//! solver.start(Word::new("slate").unwrap());
//! assert_eq!(solver.run_to_completion().unwrap(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Candidate filtering, scoring and the game loop
pub mod solver;

// Word lists
pub mod wordlists;

// Human vs. solver sessions
pub mod duel;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
