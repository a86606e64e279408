//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::duel::{DuelOutcome, DuelSession};
use crate::solver::{MAX_ATTEMPTS, Strategy, TurnReport};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Longest wait for input before redrawing
const MAX_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<S: Strategy> {
    pub session: DuelSession<S>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
    solver_solves: Arc<AtomicUsize>,
    outcome_recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub human_wins: usize,
    pub solver_wins: usize,
    pub ties: usize,
}

impl<S: Strategy> App<S> {
    /// Wrap a session; the first game starts immediately
    #[must_use]
    pub fn new(session: DuelSession<S>, rng: StdRng) -> Self {
        let solver_solves = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&solver_solves);
        let session = session.on_solver_win(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
            solver_solves,
            outcome_recorded: false,
        };
        app.new_game();
        app
    }

    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        self.messages.clear();
        self.outcome_recorded = false;

        if self.session.start_random(&mut self.rng).is_some() {
            self.add_message(
                &format!("New duel! Find the word in {MAX_ATTEMPTS} guesses before the solver does."),
                MessageStyle::Info,
            );
        } else {
            self.add_message("The word bank has no secrets to play", MessageStyle::Error);
        }
    }

    /// Whether the duel has been decided
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.outcome() != DuelOutcome::InProgress
    }

    /// Solver rows are shown in full only after the human is done
    #[must_use]
    pub fn reveal_solver(&self) -> bool {
        self.session.human().status().is_terminal()
    }

    /// Number of games the solver has solved so far
    #[must_use]
    pub fn solver_solves(&self) -> usize {
        self.solver_solves.load(Ordering::Relaxed)
    }

    pub fn type_char(&mut self, c: char) {
        if self.reveal_solver() || !c.is_ascii_alphabetic() {
            return;
        }
        if self.input_buffer.len() < WORD_LENGTH {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit(&mut self, now: Instant) {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let input = std::mem::take(&mut self.input_buffer);
        match self.session.submit_guess(&input, now) {
            Ok(feedback) if feedback.is_solved() => {
                self.add_message(
                    &format!("Solved in {}!", self.session.human().attempts()),
                    MessageStyle::Success,
                );
            }
            Ok(_) => {}
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.input_buffer = input;
            }
        }
        self.record_outcome();
    }

    /// Let the session fire a due solver turn
    pub fn tick(&mut self, now: Instant) -> Option<TurnReport> {
        let report = self.session.tick(now)?;
        if report.record.feedback.is_solved() {
            self.add_message(
                &format!("The solver found it in {}", self.session.solver().turn()),
                MessageStyle::Info,
            );
        }
        self.record_outcome();
        Some(report)
    }

    /// How long to wait for a key before the next tick
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .next_solver_turn_at()
            .map_or(MAX_POLL, |at| at.saturating_duration_since(now).min(MAX_POLL))
    }

    fn record_outcome(&mut self) {
        if self.outcome_recorded {
            return;
        }
        let outcome = self.session.outcome();
        let style = match outcome {
            DuelOutcome::InProgress => return,
            DuelOutcome::HumanWins => {
                self.stats.human_wins += 1;
                MessageStyle::Success
            }
            DuelOutcome::SolverWins => {
                self.stats.solver_wins += 1;
                MessageStyle::Error
            }
            DuelOutcome::Tie => {
                self.stats.ties += 1;
                MessageStyle::Info
            }
            DuelOutcome::BothLost => MessageStyle::Error,
        };
        self.stats.total_games += 1;
        self.outcome_recorded = true;

        self.add_message(outcome.banner(), style);
        if let Some(secret) = self.session.secret() {
            self.add_message(&format!("The word was {secret}"), MessageStyle::Info);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Strategy>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Strategy>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_game(),
                KeyCode::Char('q') if app.is_over() => app.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter if app.is_over() => app.new_game(),
                KeyCode::Char(c) => app.type_char(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Enter => app.submit(Instant::now()),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::DuelConfig;
    use crate::solver::GuessScorer;
    use crate::wordlists::WordBank;
    use rand::SeedableRng;

    const DELAY: Duration = Duration::from_millis(100);

    fn app() -> App<GuessScorer> {
        let session = DuelSession::new(
            WordBank::embedded(),
            GuessScorer::default(),
            DuelConfig {
                solver_delay: DELAY,
            },
        )
        .unwrap();
        App::new(session, StdRng::seed_from_u64(7))
    }

    fn type_word(app: &mut App<GuessScorer>, word: &str) {
        for c in word.chars() {
            app.type_char(c);
        }
    }

    #[test]
    fn new_app_has_a_game_running() {
        let app = app();
        assert!(app.session.is_started());
        assert!(!app.is_over());
        assert_eq!(app.stats, Statistics::default());
    }

    #[test]
    fn typing_is_uppercased_and_capped() {
        let mut app = app();
        type_word(&mut app, "crane1s");
        assert_eq!(app.input_buffer, "CRANE");
        app.backspace();
        assert_eq!(app.input_buffer, "CRAN");
    }

    #[test]
    fn short_word_is_not_submitted() {
        let mut app = app();
        type_word(&mut app, "cran");
        app.submit(Instant::now());
        assert_eq!(app.session.human().attempts(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn solver_waits_for_its_delay() {
        let mut app = app();
        let start = Instant::now();
        type_word(&mut app, "ghost");
        app.submit(start);
        assert_eq!(app.session.human().attempts(), 1);
        assert!(app.input_buffer.is_empty());

        assert!(app.tick(start).is_none());
        assert!(app.poll_timeout(start) <= DELAY);
        assert!(app.tick(start + DELAY).is_some());
        assert_eq!(app.session.solver().turn(), 1);
    }

    #[test]
    fn winning_guess_records_one_game() {
        let mut app = app();
        let secret = app.session.secret().unwrap();
        let start = Instant::now();
        type_word(&mut app, secret.text());
        app.submit(start);
        assert!(app.reveal_solver());

        let mut now = start;
        while app.session.next_solver_turn_at().is_some() {
            now += DELAY;
            app.tick(now);
        }

        assert!(app.is_over());
        assert_eq!(app.stats.total_games, 1);
        // First-guess hit beats or ties the solver
        assert_eq!(app.stats.solver_wins, 0);
        assert_eq!(app.stats.human_wins + app.stats.ties, 1);

        app.new_game();
        assert!(!app.is_over());
        assert_eq!(app.stats.total_games, 1);
    }
}
