//! Coloured terminal output for the line-based commands

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_solve_result, print_suggest_result,
};
pub use formatters::{colored_row, masked_row};
