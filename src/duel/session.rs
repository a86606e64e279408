//! A human and the solver racing on the same secret
//!
//! The session is the solver's host: it owns the game lifecycle, decides
//! when the solver may move (lockstep with the human, paced by a delay)
//! and declares the outcome once both boards are finished.

use super::board::{GuessError, HumanBoard};
use crate::core::{Feedback, Word};
use crate::solver::{GameStatus, SolverError, SolverLoop, Strategy, TurnReport, WinEvent};
use crate::wordlists::WordBank;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Host-side settings for a duel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuelConfig {
    /// Pause between the human's move and the solver's reply
    pub solver_delay: Duration,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            solver_delay: Duration::from_millis(600),
        }
    }
}

/// Who came out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuelOutcome {
    InProgress,
    HumanWins,
    SolverWins,
    Tie,
    BothLost,
}

impl DuelOutcome {
    #[must_use]
    pub const fn banner(self) -> &'static str {
        match self {
            Self::InProgress => "",
            Self::HumanWins => "You beat the solver!",
            Self::SolverWins => "The solver wins this one.",
            Self::Tie => "Dead heat: same number of guesses.",
            Self::BothLost => "Nobody found it.",
        }
    }
}

pub struct DuelSession<S: Strategy> {
    bank: WordBank,
    config: DuelConfig,
    solver: SolverLoop<S>,
    human: HumanBoard,
    secret: Option<Word>,
    pending_turn: Option<Instant>,
}

impl<S: Strategy> DuelSession<S> {
    /// Create an idle session; call [`DuelSession::start`] to play
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyDictionary`] if the bank holds no words.
    pub fn new(bank: WordBank, strategy: S, config: DuelConfig) -> Result<Self, SolverError> {
        let solver = SolverLoop::new(strategy, bank.dictionary())?;
        Ok(Self {
            bank,
            config,
            solver,
            human: HumanBoard::new(),
            secret: None,
            pending_turn: None,
        })
    }

    /// Forward solver wins to `handler`
    #[must_use]
    pub fn on_solver_win(mut self, handler: impl FnMut(&WinEvent) + Send + 'static) -> Self {
        self.solver = self.solver.on_win(handler);
        self
    }

    /// Start a game on `secret`, resetting both boards
    ///
    /// A solver turn scheduled for the previous game is dropped.
    pub fn start(&mut self, secret: Word) {
        if !self.bank.is_secret(&secret) {
            warn!(%secret, "duel secret is not one of the bank's answer words");
        }
        info!("duel started");
        self.secret = Some(secret);
        self.human = HumanBoard::new();
        self.solver.start(secret);
        self.pending_turn = None;
    }

    /// Start a game on a random secret from the bank
    pub fn start_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Word> {
        let secret = self.bank.random_secret(rng)?;
        self.start(secret);
        Some(secret)
    }

    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.secret.is_some()
    }

    /// Validate and record a human guess
    ///
    /// # Errors
    /// Returns a [`GuessError`] if no game is running, the input is not a
    /// word, the word is not acceptable, or the human's board is finished.
    pub fn submit_guess(&mut self, input: &str, now: Instant) -> Result<Feedback, GuessError> {
        let secret = self.secret.ok_or(GuessError::NotStarted)?;
        let guess = Word::new(input.trim())?;
        if !self.bank.is_acceptable(&guess) {
            return Err(GuessError::NotInWordList(guess));
        }

        let feedback = self.human.submit(guess, &secret)?;
        debug!(attempt = self.human.attempts(), "human guess recorded");
        self.schedule(now);
        Ok(feedback)
    }

    /// Whether the solver is allowed to move
    ///
    /// It may move while its game is running and it is behind the human,
    /// or once the human has finished, so both boards reach the end.
    #[must_use]
    pub fn solver_due(&self) -> bool {
        self.is_started()
            && self.solver.status() == GameStatus::InProgress
            && (self.human.attempts() > self.solver.turn() || self.human.status().is_terminal())
    }

    /// When the next solver turn will fire, if one is scheduled
    #[must_use]
    pub const fn next_solver_turn_at(&self) -> Option<Instant> {
        self.pending_turn
    }

    /// Fire the scheduled solver turn if its time has come
    pub fn tick(&mut self, now: Instant) -> Option<TurnReport> {
        match self.pending_turn {
            Some(at) if now >= at => self.pending_turn = None,
            _ => return None,
        }
        if !self.solver_due() {
            return None;
        }

        let report = match self.solver.take_turn() {
            Ok(report) => report,
            Err(err) => {
                warn!(%err, "scheduled solver turn could not run");
                return None;
            }
        };
        self.schedule(now);
        Some(report)
    }

    fn schedule(&mut self, now: Instant) {
        if self.pending_turn.is_none() && self.solver_due() {
            self.pending_turn = Some(now + self.config.solver_delay);
        }
    }

    /// Result of the duel, decided once both boards are finished
    #[must_use]
    pub fn outcome(&self) -> DuelOutcome {
        match (self.human.status(), self.solver.status()) {
            (GameStatus::Won, GameStatus::Won) => {
                match self.human.attempts().cmp(&self.solver.turn()) {
                    std::cmp::Ordering::Less => DuelOutcome::HumanWins,
                    std::cmp::Ordering::Greater => DuelOutcome::SolverWins,
                    std::cmp::Ordering::Equal => DuelOutcome::Tie,
                }
            }
            (GameStatus::Won, GameStatus::Lost) => DuelOutcome::HumanWins,
            (GameStatus::Lost, GameStatus::Won) => DuelOutcome::SolverWins,
            (GameStatus::Lost, GameStatus::Lost) => DuelOutcome::BothLost,
            _ => DuelOutcome::InProgress,
        }
    }

    #[must_use]
    pub const fn human(&self) -> &HumanBoard {
        &self.human
    }

    #[must_use]
    pub const fn solver(&self) -> &SolverLoop<S> {
        &self.solver
    }

    #[must_use]
    pub const fn secret(&self) -> Option<Word> {
        self.secret
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub const fn config(&self) -> &DuelConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GuessScorer;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const DELAY: Duration = Duration::from_millis(600);

    fn session() -> DuelSession<GuessScorer> {
        DuelSession::new(
            WordBank::embedded(),
            GuessScorer::default(),
            DuelConfig {
                solver_delay: DELAY,
            },
        )
        .unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Tick until the solver has nothing left to do
    fn drain(session: &mut DuelSession<GuessScorer>, mut now: Instant) -> Instant {
        while session.next_solver_turn_at().is_some() {
            now += DELAY;
            session.tick(now);
        }
        now
    }

    #[test]
    fn guess_before_start_is_rejected() {
        let mut session = session();
        assert_eq!(
            session.submit_guess("crane", Instant::now()),
            Err(GuessError::NotStarted)
        );
    }

    #[test]
    fn invalid_and_unknown_words_are_rejected() {
        let mut session = session();
        session.start(word("crane"));
        let now = Instant::now();

        assert!(matches!(
            session.submit_guess("abc", now),
            Err(GuessError::Invalid(_))
        ));
        assert_eq!(
            session.submit_guess("zzzzz", now),
            Err(GuessError::NotInWordList(word("zzzzz")))
        );
        assert_eq!(session.human().attempts(), 0);
        assert!(session.next_solver_turn_at().is_none());
    }

    #[test]
    fn solver_waits_for_the_human_and_the_delay() {
        let mut session = session();
        session.start(word("crane"));
        let t0 = Instant::now();

        assert!(!session.solver_due());
        assert!(session.tick(t0 + DELAY).is_none());

        session.submit_guess("slate", t0).unwrap();
        assert!(session.solver_due());
        assert!(session.tick(t0).is_none());

        let report = session.tick(t0 + DELAY).unwrap();
        assert_eq!(report.record.guess, word("salet"));
        assert_eq!(session.solver().turn(), 1);

        // Caught up with the human: nothing more until the next guess
        assert!(!session.solver_due());
        assert!(session.tick(t0 + DELAY * 5).is_none());
    }

    #[test]
    fn restart_discards_pending_turn() {
        let mut session = session();
        session.start(word("crane"));
        let t0 = Instant::now();
        session.submit_guess("slate", t0).unwrap();
        assert!(session.next_solver_turn_at().is_some());

        session.start(word("ghost"));

        assert!(session.next_solver_turn_at().is_none());
        assert!(session.tick(t0 + DELAY).is_none());
        assert_eq!(session.solver().turn(), 0);
        assert_eq!(session.human().attempts(), 0);
    }

    #[test]
    fn human_win_lets_solver_play_out() {
        let mut session = session();
        session.start(word("crane"));
        let t0 = Instant::now();

        assert!(session.submit_guess("crane", t0).unwrap().is_solved());
        assert_eq!(session.outcome(), DuelOutcome::InProgress);

        drain(&mut session, t0);

        assert!(session.solver().status().is_terminal());
        assert_eq!(session.outcome(), DuelOutcome::HumanWins);
    }

    #[test]
    fn matching_attempts_tie() {
        let secret = word("crane");
        let mut replay =
            SolverLoop::new(GuessScorer::default(), WordBank::embedded().dictionary()).unwrap();
        replay.start(secret);
        assert_eq!(replay.run_to_completion().unwrap(), GameStatus::Won);

        let mut session = session();
        session.start(secret);
        let mut now = Instant::now();

        // Copy the solver's own path move for move
        for record in replay.history() {
            session.submit_guess(record.guess.text(), now).unwrap();
            now = drain(&mut session, now);
        }

        assert_eq!(session.solver().status(), GameStatus::Won);
        assert_eq!(session.solver().turn(), replay.history().len());
        assert_eq!(session.outcome(), DuelOutcome::Tie);
    }

    #[test]
    fn human_loss_and_solver_win() {
        let wins = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wins);
        let mut session = session().on_solver_win(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        session.start(word("crane"));
        let mut now = Instant::now();

        for _ in 0..6 {
            session.submit_guess("ghost", now).unwrap();
            now = drain(&mut session, now);
        }

        assert_eq!(session.human().status(), GameStatus::Lost);
        assert_eq!(session.outcome(), DuelOutcome::SolverWins);
        assert_eq!(wins.load(Ordering::SeqCst), 1);
        assert_eq!(
            session.submit_guess("crane", now),
            Err(GuessError::GameOver)
        );
    }

    #[test]
    fn outcome_banners() {
        assert!(DuelOutcome::InProgress.banner().is_empty());
        assert!(!DuelOutcome::Tie.banner().is_empty());
    }
}
