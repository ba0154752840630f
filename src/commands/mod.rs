//! Command implementations

pub mod compare;
pub mod simple;
pub mod solve;
pub mod survey;

pub use compare::{
    AlgorithmRun, CompareConfig, ComparisonReport, DEFAULT_RUNS, Slowdown, TIMING_RESOLUTION,
    compare_algorithms,
};
pub use simple::{PlayCommand, run_simple, run_simple_with};
pub use solve::{SolveResult, neighbors_of, solve_pair};
pub use survey::{AlgorithmSummary, SurveyConfig, SurveyReport, run_survey};
