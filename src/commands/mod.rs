//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;
pub mod test_all;

pub use analyze::{AnalysisResult, AnalyzeError, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveError, SolveResult, solve_word};
pub use suggest::{FeedbackRow, RowParseError, SuggestError, SuggestResult, suggest_next};
pub use test_all::{
    TestAllStatistics, WordTestResult, print_test_all_statistics, run_test_all,
};
