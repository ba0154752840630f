//! Pair solving command
//!
//! Solves a specific start/end pair and returns the ladder with search statistics.

use crate::core::{Ladder, Word};
use crate::dictionary::Dictionary;
use crate::error::LadderError;
use crate::solver::{Algorithm, Solver, neighbors};
use std::time::{Duration, Instant};

/// Result of solving a pair
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub algorithm: Algorithm,
    pub ladder: Ladder,
    pub expanded: usize,
    pub elapsed: Duration,
}

/// Solve `start → end` with the solver's algorithm
///
/// # Errors
///
/// Returns an error if:
/// - Either word is not in the dictionary
/// - No ladder connects the words
/// - The solver's limits stop the search
pub fn solve_pair(solver: &Solver<'_>, start: &str, end: &str) -> Result<SolveResult, LadderError> {
    let timer = Instant::now();
    let report = solver.search(start, end)?;
    let elapsed = timer.elapsed();

    let ladder = report.ladder.ok_or_else(|| LadderError::NoPathFound {
        start: start.to_string(),
        end: end.to_string(),
    })?;

    Ok(SolveResult {
        algorithm: solver.algorithm(),
        ladder,
        expanded: report.expanded,
        elapsed,
    })
}

/// One-letter neighbors of `word`, which need not itself be a dictionary word
///
/// # Errors
///
/// Returns `LadderError::InvalidWord` if `word` contains anything but letters.
pub fn neighbors_of<'d>(word: &str, dictionary: &'d Dictionary) -> Result<(Word, Vec<&'d Word>), LadderError> {
    let word = Word::new(word)?;
    let found = neighbors(&word, dictionary);
    Ok((word, found))
}
