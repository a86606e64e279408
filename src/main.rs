//! Wordle Duel - CLI
//!
//! Race an autonomous solver on the same hidden word, in a TUI or on the
//! command line, or run the solver on its own.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordle_duel::{
    commands::{
        FeedbackRow, analyze_word, print_test_all_statistics, run_benchmark, run_simple,
        run_test_all, sample_targets, solve_word, suggest_next,
    },
    core::Word,
    duel::{DuelConfig, DuelSession},
    output::{
        print_analysis_result, print_benchmark_result, print_solve_result, print_suggest_result,
    },
    solver::{GuessScorer, ScoringWeights, SolverLoop},
    wordlists::{WordBank, WordBankSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_duel",
    about = "Play Wordle against a letter-frequency solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers' (secrets only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: WordBankSource,

    /// Seed for secret selection and sampling
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pause before each solver move in play/simple, in milliseconds
    #[arg(long, global = true, default_value = "600")]
    delay_ms: u64,

    #[command(flatten)]
    scoring: ScoringArgs,
}

/// Overrides for the guess heuristic
#[derive(Args)]
struct ScoringArgs {
    /// Weight of overall letter frequency
    #[arg(long, global = true)]
    overall_weight: Option<f64>,

    /// Weight of positional letter frequency
    #[arg(long, global = true)]
    positional_weight: Option<f64>,

    /// Multiplier for repeated letters while the pool is large
    #[arg(long, global = true)]
    repeat_penalty: Option<f64>,

    /// Maximum candidates scored per turn
    #[arg(long, global = true)]
    scan_limit: Option<usize>,

    /// Pool size above which repeated letters are penalized
    #[arg(long, global = true)]
    penalty_threshold: Option<usize>,

    /// Guess to play when no candidate fits the feedback
    #[arg(long, global = true)]
    fallback_guess: Option<Word>,
}

impl From<&ScoringArgs> for ScoringWeights {
    fn from(args: &ScoringArgs) -> Self {
        let defaults = Self::default();
        Self {
            overall_weight: args.overall_weight.unwrap_or(defaults.overall_weight),
            positional_weight: args.positional_weight.unwrap_or(defaults.positional_weight),
            repeat_penalty: args.repeat_penalty.unwrap_or(defaults.repeat_penalty),
            scan_limit: args.scan_limit.unwrap_or(defaults.scan_limit),
            penalty_threshold: args.penalty_threshold.unwrap_or(defaults.penalty_threshold),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI duel (default)
    Play,

    /// Duel on plain stdin/stdout without the TUI
    Simple,

    /// Let the solver play a specific secret word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest the next guess for a game played elsewhere
    Suggest {
        /// Rows played so far, as GUESS:FEEDBACK (e.g. salet:-Y--G)
        rows: Vec<FeedbackRow>,
    },

    /// Break down the heuristic score of a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on every secret word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wordle_duel=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let bank = WordBank::load(&cli.wordlist);
    let mut scorer = GuessScorer::new(ScoringWeights::from(&cli.scoring));
    if let Some(fallback) = cli.scoring.fallback_guess {
        scorer = scorer.with_fallback(fallback);
    }
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let config = DuelConfig {
        solver_delay: Duration::from_millis(cli.delay_ms),
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(bank, scorer, config, rng),
        Commands::Simple => run_simple_command(bank, scorer, config, &mut rng),
        Commands::Solve { word, verbose } => {
            let mut solver = SolverLoop::new(scorer, bank.dictionary())?;
            let result = solve_word(&word, &mut solver)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Suggest { rows } => {
            let result = suggest_next(&rows, &bank.dictionary(), &scorer)?;
            print_suggest_result(&result);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &bank.dictionary(), &scorer)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random words...");
            let targets = sample_targets(bank.secrets(), count, &mut rng);
            let mut solver = SolverLoop::new(scorer, bank.dictionary())?;
            let result = run_benchmark(&mut solver, &targets)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => run_test_all_command(&bank, &scorer, limit),
    }
}

fn run_test_all_command(bank: &WordBank, scorer: &GuessScorer, limit: Option<usize>) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Wordle Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible answers", bank.secrets().len());
    println!("Dictionary: {} words\n", bank.acceptable_count());

    let stats = run_test_all(scorer, &bank.dictionary(), bank.secrets(), limit, true)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_simple_command(
    bank: WordBank,
    scorer: GuessScorer,
    config: DuelConfig,
    rng: &mut StdRng,
) -> Result<()> {
    let mut session = DuelSession::new(bank, scorer, config)?.on_solver_win(|event| {
        tracing::info!(
            secret = %event.secret,
            attempts = event.attempts,
            "solver solved the duel word"
        );
    });
    run_simple(&mut session, rng)
}

fn run_play_command(
    bank: WordBank,
    scorer: GuessScorer,
    config: DuelConfig,
    rng: StdRng,
) -> Result<()> {
    use wordle_duel::interactive::{App, run_tui};

    let session = DuelSession::new(bank, scorer, config)?;
    run_tui(App::new(session, rng))
}
