//! Test all answers - comprehensive solver evaluation
//!
//! Runs the solver against every secret word in parallel and generates
//! statistics.

use crate::core::Word;
use crate::solver::{CandidatePool, GameStatus, MAX_ATTEMPTS, SolverError, SolverLoop, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: Word,
    pub guesses: Vec<Word>,
    pub success: bool,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<Word>,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(Word, usize)>,
}

/// Run the solver on every target (or the first `limit` of them)
///
/// Each rayon worker owns its own [`SolverLoop`]; games never share state.
///
/// # Errors
///
/// Returns [`SolverError::EmptyDictionary`] if `dictionary` is empty.
pub fn run_test_all<S: Strategy + Clone + Send + Sync>(
    strategy: &S,
    dictionary: &CandidatePool,
    targets: &[Word],
    limit: Option<usize>,
    progress: bool,
) -> Result<TestAllStatistics, SolverError> {
    let targets = &targets[..limit.unwrap_or(targets.len()).min(targets.len())];

    let pb = if progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let results = targets
        .par_iter()
        .map_init(
            || SolverLoop::new(strategy.clone(), dictionary.clone()),
            |solver, &target| -> Result<WordTestResult, SolverError> {
                let solver = solver.as_mut().map_err(|err| *err)?;
                solver.start(target);
                let status = solver.run_to_completion()?;
                pb.inc(1);
                Ok(WordTestResult {
                    word: target,
                    guesses: solver.history().iter().map(|r| r.guess).collect(),
                    success: status == GameStatus::Won,
                })
            },
        )
        .collect::<Result<Vec<_>, SolverError>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, start.elapsed()))
}

fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failed = Vec::new();
    let mut total_guesses = 0;

    for result in results {
        if result.success {
            total_guesses += result.guesses.len();
            *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
        } else {
            failed.push(result.word);
        }
    }

    let solved_counts = || results.iter().filter(|r| r.success).map(|r| r.guesses.len());
    let solved = results.len() - failed.len();

    let mut worst_words: Vec<(Word, usize)> = results
        .iter()
        .filter(|r| r.success && r.guesses.len() >= MAX_ATTEMPTS - 1)
        .map(|r| (r.word, r.guesses.len()))
        .collect();
    worst_words.sort_by_key(|&(word, n)| (std::cmp::Reverse(n), word));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved,
        failed,
        guess_distribution,
        total_time,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        max_guesses: solved_counts().max().unwrap_or(0),
        min_guesses: solved_counts().min().unwrap_or(0),
        worst_words,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            format!("({:.1}%)", stats.failed.len() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Guess range:         {}-{}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / total * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.text().yellow());
        }
    }

    if !stats.failed.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in stats.failed.iter().take(20) {
            println!("  {}", word.text().red());
        }
    }
}
