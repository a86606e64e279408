//! Benchmark command
//!
//! Tests solver performance across a random sample of secrets.

use crate::core::Word;
use crate::solver::{GameStatus, SolverError, SolverLoop, Strategy};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    /// Average over solved words
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count of each solved word
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Draw up to `count` distinct secrets
pub fn sample_targets<R: Rng + ?Sized>(secrets: &[Word], count: usize, rng: &mut R) -> Vec<Word> {
    secrets.choose_multiple(rng, count).copied().collect()
}

/// Run the solver once per target word
///
/// # Errors
///
/// Propagates a [`SolverError`] if a game cannot be played.
pub fn run_benchmark<S: Strategy>(
    solver: &mut SolverLoop<S>,
    target_words: &[Word],
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut wins = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for &target in target_words {
        solver.start(target);
        if solver.run_to_completion()? == GameStatus::Won {
            let guesses = solver.turn();
            wins += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(target);
        }
    }

    let duration = start.elapsed();
    let total_words = target_words.len();

    Ok(BenchmarkResult {
        total_words,
        solved: wins,
        total_guesses,
        average_guesses: if wins > 0 {
            total_guesses as f64 / wins as f64
        } else {
            0.0
        },
        min_guesses: if wins > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CandidatePool, GuessScorer, MAX_ATTEMPTS};
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn solver() -> SolverLoop<GuessScorer> {
        SolverLoop::new(GuessScorer::default(), WordBank::embedded().dictionary()).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let targets = words_from_slice(&["crane", "slate", "ghost", "tiger", "piano"]);
        let result = run_benchmark(&mut solver(), &targets).unwrap();

        assert_eq!(result.total_words, 5);
        assert_eq!(result.solved, 5);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_ATTEMPTS);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        // Seven words one letter apart: one of them needs a seventh guess
        let trap = CandidatePool::new(words_from_slice(&[
            "batch", "catch", "hatch", "latch", "match", "patch", "watch",
        ]));
        let mut solver = SolverLoop::new(GuessScorer::default(), trap.clone()).unwrap();
        let result = run_benchmark(&mut solver, trap.as_slice()).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failures.len(), result.total_words);
        assert_eq!(result.solved, 6);
        assert_eq!(result.failures, words_from_slice(&["hatch"]));
        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.max_guesses, MAX_ATTEMPTS);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&mut solver(), &[]).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let bank = WordBank::embedded();
        let targets = sample_targets(bank.secrets(), 20, &mut StdRng::seed_from_u64(42));
        let result = run_benchmark(&mut solver(), &targets).unwrap();

        assert_eq!(result.total_words, 20);
        if result.solved > 0 {
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
        for &guess_count in result.distribution.keys() {
            assert!((1..=MAX_ATTEMPTS).contains(&guess_count));
        }
    }

    #[test]
    fn sampling_is_reproducible() {
        let bank = WordBank::embedded();
        let a = sample_targets(bank.secrets(), 10, &mut StdRng::seed_from_u64(1));
        let b = sample_targets(bank.secrets(), 10, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }
}
