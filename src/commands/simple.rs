//! Simple text duel
//!
//! Line-based version of the duel for terminals without TUI support

use crate::duel::{DuelOutcome, DuelSession};
use crate::output::{colored_row, masked_row};
use crate::solver::{MAX_ATTEMPTS, Strategy, TurnReport};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Instant;

/// Run duels on stdin/stdout until the player quits
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails, or
/// if the word bank has no secrets to draw from.
pub fn run_simple<S: Strategy, R: Rng + ?Sized>(
    session: &mut DuelSession<S>,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Duel - You vs. Solver                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word in {MAX_ATTEMPTS} tries.");
    println!("The solver plays the same word, one move after each of yours.");
    println!("Its letters stay hidden until the game is over.\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    play_duels(session, rng, get_user_input)
}

/// How one duel ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEnd {
    Finished,
    Restart,
    Quit,
}

/// Duel loop over any line source; `read_line` gets the prompt to show
fn play_duels<S, R, F>(session: &mut DuelSession<S>, rng: &mut R, mut read_line: F) -> Result<()>
where
    S: Strategy,
    R: Rng + ?Sized,
    F: FnMut(&str) -> io::Result<String>,
{
    loop {
        session
            .start_random(rng)
            .context("word bank has no secrets to play")?;

        match play_one(session, &mut read_line)? {
            GameEnd::Quit => return Ok(()),
            GameEnd::Restart => println!("\n🔄 New game started!\n"),
            GameEnd::Finished => match read_line("Play again? (y/n)")?.as_str() {
                "y" | "yes" | "new" => println!("\n🔄 New game started!\n"),
                _ => return Ok(()),
            },
        }
    }
}

/// Play until the duel has an outcome or the player leaves it
fn play_one<S, F>(session: &mut DuelSession<S>, read_line: &mut F) -> Result<GameEnd>
where
    S: Strategy,
    F: FnMut(&str) -> io::Result<String>,
{
    while session.outcome() == DuelOutcome::InProgress {
        if !session.human().status().is_terminal() {
            let input = read_line(&format!("Guess {}", session.human().attempts() + 1))?;
            match input.as_str() {
                "quit" | "exit" | "q" => {
                    println!("\n👋 Goodbye!");
                    return Ok(GameEnd::Quit);
                }
                "new" => return Ok(GameEnd::Restart),
                _ => {}
            }

            match session.submit_guess(&input, Instant::now()) {
                Ok(feedback) => {
                    let guess = session.human().rows().last().map(|(word, _)| *word);
                    if let Some(guess) = guess {
                        println!("  You:    {}", colored_row(&guess, &feedback));
                    }
                }
                Err(err) => {
                    println!("  ❌ {err}");
                    continue;
                }
            }
        }

        run_solver_turns(session);
    }

    print_final_boards(session);
    Ok(GameEnd::Finished)
}

/// Wait out the pacing delay and play every turn the solver is owed
fn run_solver_turns<S: Strategy>(session: &mut DuelSession<S>) {
    while let Some(at) = session.next_solver_turn_at() {
        thread::sleep(at.saturating_duration_since(Instant::now()));
        if let Some(report) = session.tick(Instant::now()) {
            print_solver_turn(&report);
        }
    }
}

fn print_solver_turn(report: &TurnReport) {
    println!(
        "  Solver: {}  {}",
        masked_row(&report.record.feedback),
        format!("({} left)", report.remaining).bright_black()
    );
}

fn print_final_boards<S: Strategy>(session: &DuelSession<S>) {
    println!("\n{}", "─".repeat(60).cyan());
    if let Some(secret) = session.secret() {
        println!("The word was {}", secret.text().bright_yellow().bold());
    }

    println!("\nYou ({} guesses):", session.human().attempts());
    for (word, feedback) in session.human().rows() {
        println!("  {}", colored_row(word, feedback));
    }

    println!("\nSolver ({} guesses):", session.solver().turn());
    for record in session.solver().history() {
        println!("  {}", colored_row(&record.guess, &record.feedback));
    }

    let outcome = session.outcome();
    let banner = match outcome {
        DuelOutcome::HumanWins => outcome.banner().green().bold(),
        DuelOutcome::SolverWins | DuelOutcome::BothLost => outcome.banner().red().bold(),
        DuelOutcome::Tie | DuelOutcome::InProgress => outcome.banner().yellow().bold(),
    };
    println!("\n{banner}");
    println!("{}\n", "─".repeat(60).cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Ok("quit".to_string());
    }
    Ok(input.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::DuelConfig;
    use crate::solver::GuessScorer;
    use crate::wordlists::WordBank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn session() -> DuelSession<GuessScorer> {
        DuelSession::new(
            WordBank::embedded(),
            GuessScorer::default(),
            DuelConfig {
                solver_delay: Duration::ZERO,
            },
        )
        .unwrap()
    }

    /// Feed `lines` in order and record every prompt shown
    fn scripted(lines: &[&str]) -> (Vec<String>, Result<()>) {
        let mut prompts = Vec::new();
        let mut lines = lines.iter();
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(7);

        let result = play_duels(&mut session, &mut rng, |prompt| {
            prompts.push(prompt.to_string());
            Ok(lines.next().map_or_else(|| "quit".to_string(), |line| (*line).to_string()))
        });
        (prompts, result)
    }

    #[test]
    fn new_mid_game_starts_the_next_game_directly() {
        let (prompts, result) = scripted(&["new", "quit"]);
        assert!(result.is_ok());
        assert_eq!(prompts, ["Guess 1", "Guess 1"]);
    }

    #[test]
    fn invalid_guess_is_asked_again() {
        let (prompts, result) = scripted(&["zzzzz", "quit"]);
        assert!(result.is_ok());
        assert_eq!(prompts, ["Guess 1", "Guess 1"]);
    }

    #[test]
    fn finished_game_offers_another() {
        let secret = WordBank::embedded()
            .random_secret(&mut StdRng::seed_from_u64(7))
            .unwrap();
        let (prompts, result) = scripted(&[secret.text(), "n"]);
        assert!(result.is_ok());
        assert_eq!(prompts, ["Guess 1", "Play again? (y/n)"]);
    }
}
