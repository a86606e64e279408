//! Solver game loop
//!
//! Drives one game turn by turn: pick a guess, score it against the secret,
//! record it, then either finish or prune the pool. The loop exclusively
//! owns its [`SolverState`]; hosts observe it through accessors or an owned
//! [`SolverSnapshot`].

use super::{CandidatePool, Strategy};
use crate::core::{Feedback, Word};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Attempts allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Default pool size at or below which snapshots list the candidates
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One row of the solver's guess history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
    /// Pool size when the guess was chosen
    pub candidates_before: usize,
}

/// Result of a single [`SolverLoop::take_turn`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub record: GuessRecord,
    /// Status after the turn
    pub status: GameStatus,
    /// Pool size after the turn
    pub remaining: usize,
}

/// Fired once when the solver matches the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinEvent {
    pub secret: Word,
    pub attempts: usize,
}

/// Read-only copy of the solver's state for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverSnapshot {
    pub status: GameStatus,
    pub turn: usize,
    pub remaining: usize,
    pub history: Vec<GuessRecord>,
    /// Remaining words when the pool is small enough to list
    pub preview: Option<Vec<Word>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("the word bank is empty")]
    EmptyDictionary,
    #[error("the solver's game has not started")]
    NotStarted,
    #[error("the solver's game is already over ({0})")]
    GameOver(GameStatus),
}

/// Per-game mutable state
#[derive(Debug, Clone)]
struct SolverState {
    pool: CandidatePool,
    turn: usize,
    status: GameStatus,
    history: Vec<GuessRecord>,
}

impl SolverState {
    const fn idle() -> Self {
        Self {
            pool: CandidatePool::empty(),
            turn: 0,
            status: GameStatus::NotStarted,
            history: Vec::new(),
        }
    }

    fn fresh(dictionary: &CandidatePool) -> Self {
        Self {
            pool: dictionary.clone(),
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }
}

type WinHandler = Box<dyn FnMut(&WinEvent) + Send>;

/// Turn-by-turn solver for one secret at a time
pub struct SolverLoop<S: Strategy> {
    strategy: S,
    dictionary: CandidatePool,
    secret: Option<Word>,
    state: SolverState,
    preview_limit: usize,
    on_win: Option<WinHandler>,
}

impl<S: Strategy> SolverLoop<S> {
    /// Create a solver over `dictionary`
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyDictionary`] if the dictionary has no words.
    pub fn new(strategy: S, dictionary: CandidatePool) -> Result<Self, SolverError> {
        if dictionary.is_empty() {
            return Err(SolverError::EmptyDictionary);
        }

        Ok(Self {
            strategy,
            dictionary,
            secret: None,
            state: SolverState::idle(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            on_win: None,
        })
    }

    /// Register a handler fired exactly once per won game
    #[must_use]
    pub fn on_win(mut self, handler: impl FnMut(&WinEvent) + Send + 'static) -> Self {
        self.on_win = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub const fn with_preview_limit(mut self, preview_limit: usize) -> Self {
        self.preview_limit = preview_limit;
        self
    }

    /// Start a new game, discarding whatever the previous one left behind
    pub fn start(&mut self, secret: Word) {
        if !self.dictionary.contains(&secret) {
            warn!(%secret, "secret is not in the dictionary; the pool may run dry");
        }
        info!(dictionary = self.dictionary.len(), "solver game started");

        self.secret = Some(secret);
        self.state = SolverState::fresh(&self.dictionary);
    }

    /// Play exactly one turn
    ///
    /// # Errors
    /// - [`SolverError::NotStarted`] before the first [`SolverLoop::start`]
    /// - [`SolverError::GameOver`] once the game is won or lost
    ///
    /// The state is left untouched in both cases.
    pub fn take_turn(&mut self) -> Result<TurnReport, SolverError> {
        let secret = match (self.state.status, self.secret) {
            (GameStatus::InProgress, Some(secret)) => secret,
            (GameStatus::NotStarted, _) | (_, None) => return Err(SolverError::NotStarted),
            (status, Some(_)) => return Err(SolverError::GameOver(status)),
        };

        let state = &mut self.state;
        let candidates_before = state.pool.len();
        let guess = self.strategy.select_guess(&state.pool, state.turn);
        let feedback = Feedback::evaluate(&guess, &secret);

        let record = GuessRecord {
            guess,
            feedback,
            candidates_before,
        };
        state.history.push(record);
        state.turn += 1;

        if feedback.is_solved() {
            state.status = GameStatus::Won;
            state.pool = CandidatePool::new([guess]);
            info!(%secret, attempts = state.turn, "solver won");

            let event = WinEvent {
                secret,
                attempts: state.turn,
            };
            if let Some(handler) = self.on_win.as_mut() {
                handler(&event);
            }
        } else if state.turn == MAX_ATTEMPTS {
            state.status = GameStatus::Lost;
            info!(%secret, "solver lost");
        } else {
            state.pool.filter(&guess, feedback);
        }

        debug!(
            turn = state.turn,
            %guess,
            feedback = %feedback,
            remaining = state.pool.len(),
            "solver turn"
        );

        Ok(TurnReport {
            record,
            status: state.status,
            remaining: state.pool.len(),
        })
    }

    /// Play turns until the game is won or lost
    ///
    /// # Errors
    /// Same as [`SolverLoop::take_turn`] for the first turn.
    pub fn run_to_completion(&mut self) -> Result<GameStatus, SolverError> {
        if self.state.status.is_terminal() {
            return Ok(self.state.status);
        }
        loop {
            let report = self.take_turn()?;
            if report.status.is_terminal() {
                return Ok(report.status);
            }
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Number of turns taken in the current game
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.state.turn
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state.pool.len()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.state.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidatePool {
        &self.state.pool
    }

    #[must_use]
    pub const fn secret(&self) -> Option<Word> {
        self.secret
    }

    #[must_use]
    pub const fn dictionary(&self) -> &CandidatePool {
        &self.dictionary
    }

    #[must_use]
    pub fn snapshot(&self) -> SolverSnapshot {
        SolverSnapshot {
            status: self.state.status,
            turn: self.state.turn,
            remaining: self.state.pool.len(),
            history: self.state.history.clone(),
            preview: self
                .state
                .pool
                .preview(self.preview_limit)
                .map(<[Word]>::to_vec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GuessScorer;
    use crate::wordlists::loader::words_from_slice;
    use std::cell::Cell;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "brave", "grape", "shape", "zebra",
        "allow", "llama",
    ];

    fn dictionary() -> CandidatePool {
        CandidatePool::new(words_from_slice(WORDS))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Plays a fixed word every turn
    struct Stubborn(Word);

    impl Strategy for Stubborn {
        fn select_guess(&self, _pool: &CandidatePool, _turn: usize) -> Word {
            self.0
        }
    }

    /// Records the turn index it was asked about
    struct TurnSpy {
        seen: Cell<usize>,
    }

    impl Strategy for TurnSpy {
        fn select_guess(&self, pool: &CandidatePool, turn: usize) -> Word {
            self.seen.set(turn);
            pool.first().copied().unwrap_or_else(|| word("crane"))
        }
    }

    #[test]
    fn new_rejects_empty_dictionary() {
        let result = SolverLoop::new(GuessScorer::default(), CandidatePool::default());
        assert!(matches!(result, Err(SolverError::EmptyDictionary)));
    }

    #[test]
    fn turn_before_start_is_an_error() {
        let mut solver = SolverLoop::new(GuessScorer::default(), dictionary()).unwrap();
        assert_eq!(solver.status(), GameStatus::NotStarted);
        assert_eq!(solver.take_turn(), Err(SolverError::NotStarted));
        assert_eq!(solver.turn(), 0);
        assert!(solver.history().is_empty());
    }

    #[test]
    fn start_initializes_full_pool() {
        let mut solver = SolverLoop::new(GuessScorer::default(), dictionary()).unwrap();
        solver.start(word("grate"));

        assert_eq!(solver.status(), GameStatus::InProgress);
        assert_eq!(solver.turn(), 0);
        assert_eq!(solver.remaining(), WORDS.len());
        assert_eq!(solver.secret(), Some(word("grate")));
    }

    #[test]
    fn first_turn_plays_opening_book_and_shrinks_pool() {
        let mut solver = SolverLoop::new(GuessScorer::default(), dictionary()).unwrap();
        solver.start(word("grate"));

        let report = solver.take_turn().unwrap();

        // SALET is not in this dictionary, CRANE is next in the book
        assert_eq!(report.record.guess, word("crane"));
        assert_eq!(report.record.candidates_before, WORDS.len());
        assert_eq!(report.status, GameStatus::InProgress);
        assert!(report.remaining < WORDS.len());
        assert!(solver.candidates().contains(&word("grate")));
        assert_eq!(solver.history().len(), 1);
    }

    #[test]
    fn solves_and_stops() {
        let mut solver = SolverLoop::new(GuessScorer::default(), dictionary()).unwrap();
        solver.start(word("llama"));

        let status = solver.run_to_completion().unwrap();

        assert_eq!(status, GameStatus::Won);
        assert!(solver.turn() <= MAX_ATTEMPTS);
        let last = solver.history().last().unwrap();
        assert_eq!(last.guess, word("llama"));
        assert!(last.feedback.is_solved());
        assert_eq!(
            solver.take_turn(),
            Err(SolverError::GameOver(GameStatus::Won))
        );
    }

    #[test]
    fn loses_after_six_attempts() {
        let mut solver = SolverLoop::new(Stubborn(word("zebra")), dictionary()).unwrap();
        solver.start(word("crane"));

        for turn in 1..MAX_ATTEMPTS {
            let report = solver.take_turn().unwrap();
            assert_eq!(report.status, GameStatus::InProgress, "turn {turn}");
        }
        let last = solver.take_turn().unwrap();

        assert_eq!(last.status, GameStatus::Lost);
        assert_eq!(solver.turn(), MAX_ATTEMPTS);
        assert_eq!(solver.history().len(), MAX_ATTEMPTS);
        assert_eq!(
            solver.take_turn(),
            Err(SolverError::GameOver(GameStatus::Lost))
        );
    }

    #[test]
    fn strategy_sees_turn_index() {
        let spy = TurnSpy { seen: Cell::new(99) };
        let mut solver = SolverLoop::new(&spy, dictionary()).unwrap();
        solver.start(word("zebra"));

        solver.take_turn().unwrap();
        assert_eq!(spy.seen.get(), 0);
        solver.take_turn().unwrap();
        assert_eq!(spy.seen.get(), 1);
    }

    #[test]
    fn win_handler_fires_once() {
        let wins = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wins);
        let mut solver = SolverLoop::new(GuessScorer::default(), dictionary())
            .unwrap()
            .on_win(move |event| {
                assert_eq!(event.secret.text(), "BRAVE");
                counter.fetch_add(1, Ordering::SeqCst);
            });

        solver.start(word("brave"));
        solver.run_to_completion().unwrap();
        let _ = solver.take_turn();
        let _ = solver.run_to_completion();

        assert_eq!(wins.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn win_handler_silent_on_loss() {
        let wins = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wins);
        let mut solver = SolverLoop::new(Stubborn(word("zebra")), dictionary())
            .unwrap()
            .on_win(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        solver.start(word("crane"));
        assert_eq!(solver.run_to_completion(), Ok(GameStatus::Lost));
        assert_eq!(wins.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn restart_resets_state() {
        let mut solver = SolverLoop::new(GuessScorer::default(), dictionary()).unwrap();
        solver.start(word("grape"));
        solver.take_turn().unwrap();
        solver.take_turn().unwrap();

        solver.start(word("shape"));

        assert_eq!(solver.status(), GameStatus::InProgress);
        assert_eq!(solver.turn(), 0);
        assert!(solver.history().is_empty());
        assert_eq!(solver.remaining(), WORDS.len());
        assert_eq!(solver.run_to_completion(), Ok(GameStatus::Won));
    }

    #[test]
    fn secret_outside_dictionary_falls_back_without_panicking() {
        let mut solver = SolverLoop::new(GuessScorer::default(), dictionary()).unwrap();
        solver.start(word("xylyl"));

        let status = solver.run_to_completion().unwrap();

        assert_eq!(status, GameStatus::Lost);
        assert_eq!(solver.turn(), MAX_ATTEMPTS);
        assert_eq!(solver.remaining(), 0);
    }

    #[test]
    fn snapshot_previews_small_pools() {
        let mut solver = SolverLoop::new(GuessScorer::default(), dictionary())
            .unwrap()
            .with_preview_limit(3);
        solver.start(word("grate"));

        let before = solver.snapshot();
        assert!(before.preview.is_none());
        assert_eq!(before.remaining, WORDS.len());

        solver.take_turn().unwrap();
        let after = solver.snapshot();
        assert_eq!(after.turn, 1);
        assert_eq!(after.history.len(), 1);
        if after.remaining <= 3 {
            let preview = after.preview.unwrap();
            assert!(preview.contains(&word("grate")));
        }
    }
}
