//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, SuggestResult};
use crate::core::Word;
use crate::solver::MAX_ATTEMPTS;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if !result.in_dictionary {
        println!(
            "{}",
            "⚠ Target is not in the word list; the solver cannot narrow onto it.".yellow()
        );
    }

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_row(&step.word, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the next guess for a game played elsewhere
pub fn print_suggest_result(result: &SuggestResult) {
    if result.remaining == 0 {
        println!(
            "{}",
            "⚠ No word in the list fits that feedback; check the rows you typed.".yellow()
        );
    } else {
        println!("\n{} candidates remain", result.remaining);
        if let Some(preview) = &result.preview {
            let words: Vec<&str> = preview.iter().map(Word::text).collect();
            println!("  {}", words.join(", ").dimmed());
        }
    }

    println!(
        "\nGuess {} of {MAX_ATTEMPTS}: {}",
        result.turn + 1,
        result.suggestion.text().bright_yellow().bold()
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let score = &result.score;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        score.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} candidates:", result.total_candidates);
    for contribution in &score.contributions {
        println!(
            "   {} @{}  overall {:5}  positional {:5}  → {:8.1}",
            char::from(contribution.letter).to_string().bold(),
            contribution.position + 1,
            contribution.overall,
            contribution.positional,
            contribution.value
        );
    }

    let bar = create_progress_bar(score.diversity, 1.0, 20);
    println!("\n   Base:        {:.1}", score.base);
    println!("   Diversity:   [{}] ×{:.1}", bar.green(), score.diversity);
    if score.penalized {
        println!("   {}", "Repeated letters penalized".yellow());
    }
    println!(
        "   Score:       {}",
        format!("{:.1}", score.score).bright_yellow().bold()
    );

    match result.rank {
        Some(rank) => println!("   Rank:        {rank} of {} scanned", result.scanned),
        None => println!(
            "   Rank:        not among the {} scanned candidates",
            result.scanned
        ),
    }
    if result.in_opening_book {
        println!("\n   {}", "In the opening book".green());
    }
    println!("\n   Opening guess: {}", result.opening.text().bright_white());
    println!("   Scored pick:   {}", result.best.text().bright_white());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = result.total_words.max(1) as f64;
    for guess_count in 1..=MAX_ATTEMPTS {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / total) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        let failures: Vec<&str> = result.failures.iter().map(Word::text).collect();
        println!("\n❌ Unsolved: {}", failures.join(", ").red());
    }
}
