//! Command implementations

pub mod benchmark;
pub mod check;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_word};
pub use solve::{FoundWord, SolveConfig, SolveResult, solve_board};
