//! Algorithm comparison
//!
//! Times every search strategy on the same pair and reports which was fastest and
//! which found the shortest ladder.

use crate::core::Ladder;
use crate::dictionary::Dictionary;
use crate::error::LadderError;
use crate::solver::{Algorithm, Pathfinder, SearchLimits};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Timed runs per algorithm when not configured
pub const DEFAULT_RUNS: usize = 5;

/// Fastest times below this are too small to compare meaningfully
pub const TIMING_RESOLUTION: Duration = Duration::from_micros(1);

/// How a comparison is run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareConfig {
    /// Timed runs per algorithm; the reported time is their mean
    pub runs: usize,
    /// Time the algorithms on separate rayon workers
    pub parallel: bool,
    pub limits: SearchLimits,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            parallel: false,
            limits: SearchLimits::UNBOUNDED,
        }
    }
}

/// Measurements for one algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub average: Duration,
    pub ladder: Option<Ladder>,
    pub expanded: usize,
}

impl AlgorithmRun {
    /// Moves in the ladder found, if any
    #[must_use]
    pub fn moves(&self) -> Option<usize> {
        self.ladder.as_ref().map(Ladder::moves)
    }
}

/// Relative speed of an algorithm against the fastest one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slowdown {
    Baseline,
    /// Percentage slower than the fastest
    Percent(f64),
    /// The fastest run was below [`TIMING_RESOLUTION`]
    BelowResolution,
}

/// Outcome of [`compare_algorithms`], in BFS, UCS, A* order
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub start: String,
    pub end: String,
    pub runs: Vec<AlgorithmRun>,
}

impl ComparisonReport {
    /// The run with the smallest mean time
    #[must_use]
    pub fn fastest(&self) -> Option<&AlgorithmRun> {
        self.runs.iter().min_by_key(|run| run.average)
    }

    /// The run with the fewest moves among those that found a ladder
    #[must_use]
    pub fn shortest(&self) -> Option<&AlgorithmRun> {
        self.runs
            .iter()
            .filter_map(|run| run.moves().map(|moves| (moves, run)))
            .min_by_key(|&(moves, _)| moves)
            .map(|(_, run)| run)
    }

    /// Each algorithm's speed relative to the fastest
    #[must_use]
    pub fn slowdowns(&self) -> Vec<(Algorithm, Slowdown)> {
        let Some(fastest) = self.fastest() else {
            return Vec::new();
        };
        let baseline = fastest.average;

        self.runs
            .iter()
            .map(|run| {
                let slowdown = if baseline < TIMING_RESOLUTION {
                    Slowdown::BelowResolution
                } else if run.algorithm == fastest.algorithm {
                    Slowdown::Baseline
                } else {
                    let extra = run.average.saturating_sub(baseline).as_secs_f64();
                    Slowdown::Percent(extra / baseline.as_secs_f64() * 100.0)
                };
                (run.algorithm, slowdown)
            })
            .collect()
    }

    /// True when every algorithm found a ladder of the same length, or none did
    #[must_use]
    pub fn all_agree(&self) -> bool {
        self.runs
            .windows(2)
            .all(|pair| pair[0].moves() == pair[1].moves())
    }
}

/// Time BFS, UCS and A* on one pair
///
/// An unreachable pair is not an error: each run then records no ladder.
///
/// # Errors
/// Returns `LadderError::NotInDictionary` if either word is missing, or
/// `LadderError::SearchLimitExceeded` if `config.limits` stop a search.
pub fn compare_algorithms(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
    config: CompareConfig,
) -> Result<ComparisonReport, LadderError> {
    let measure = |&algorithm: &Algorithm| time_algorithm(algorithm, start, end, dictionary, config);

    let runs: Vec<AlgorithmRun> = if config.parallel {
        Algorithm::ALL
            .par_iter()
            .map(measure)
            .collect::<Result<_, _>>()?
    } else {
        Algorithm::ALL
            .iter()
            .map(measure)
            .collect::<Result<_, _>>()?
    };

    let report = ComparisonReport {
        start: start.to_string(),
        end: end.to_string(),
        runs,
    };

    if let (Some(fastest), Some(shortest)) = (report.fastest(), report.shortest()) {
        info!(
            start,
            end,
            fastest = %fastest.algorithm,
            shortest = %shortest.algorithm,
            moves = shortest.moves(),
            "Compared algorithms"
        );
    }

    Ok(report)
}

fn time_algorithm(
    algorithm: Algorithm,
    start: &str,
    end: &str,
    dictionary: &Dictionary,
    config: CompareConfig,
) -> Result<AlgorithmRun, LadderError> {
    let runs = config.runs.max(1);

    let timer = Instant::now();
    let report = algorithm.search(start, end, dictionary, config.limits)?;
    let mut total = timer.elapsed();

    for _ in 1..runs {
        let timer = Instant::now();
        algorithm.search(start, end, dictionary, config.limits)?;
        total += timer.elapsed();
    }

    Ok(AlgorithmRun {
        algorithm,
        average: total / runs as u32,
        ladder: report.ladder,
        expanded: report.expanded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::fixtures::small_dictionary;

    fn run(algorithm: Algorithm, micros: u64, moves: Option<usize>) -> AlgorithmRun {
        let ladder = moves.map(|m| {
            let words = ["cat", "hat", "hot", "dot", "dog"][..=m]
                .iter()
                .map(|w| crate::core::Word::new(w).unwrap())
                .collect();
            Ladder::new(words).unwrap()
        });
        AlgorithmRun {
            algorithm,
            average: Duration::from_micros(micros),
            ladder,
            expanded: 0,
        }
    }

    fn report(runs: Vec<AlgorithmRun>) -> ComparisonReport {
        ComparisonReport {
            start: "cat".into(),
            end: "dog".into(),
            runs,
        }
    }

    #[test]
    fn compare_reports_every_algorithm_in_order() {
        let dictionary = small_dictionary();
        let report = compare_algorithms("cat", "dog", &dictionary, CompareConfig::default()).unwrap();

        let order: Vec<Algorithm> = report.runs.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        assert!(report.runs.iter().all(|r| r.moves() == Some(4)));
        assert!(report.all_agree());
        assert_eq!(report.shortest().map(AlgorithmRun::moves), Some(Some(4)));
    }

    #[test]
    fn parallel_compare_matches_sequential_results() {
        let dictionary = small_dictionary();
        let config = CompareConfig {
            runs: 2,
            parallel: true,
            ..CompareConfig::default()
        };
        let report = compare_algorithms("bet", "dog", &dictionary, config).unwrap();
        let order: Vec<Algorithm> = report.runs.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        assert!(report.all_agree());
    }

    #[test]
    fn unreachable_pair_records_no_ladder() {
        let dictionary = Dictionary::from_words(["cat", "dog"]);
        let report = compare_algorithms("cat", "dog", &dictionary, CompareConfig::default()).unwrap();
        assert!(report.runs.iter().all(|r| r.ladder.is_none()));
        assert!(report.shortest().is_none());
        assert!(report.all_agree());
    }

    #[test]
    fn missing_word_is_an_error() {
        let dictionary = small_dictionary();
        assert!(matches!(
            compare_algorithms("cat", "cow", &dictionary, CompareConfig::default()),
            Err(LadderError::NotInDictionary(_))
        ));
    }

    #[test]
    fn fastest_and_slowdowns() {
        let report = report(vec![
            run(Algorithm::Bfs, 300, Some(4)),
            run(Algorithm::Ucs, 400, Some(4)),
            run(Algorithm::AStar, 200, Some(4)),
        ]);
        assert_eq!(report.fastest().map(|r| r.algorithm), Some(Algorithm::AStar));

        let slowdowns = report.slowdowns();
        assert_eq!(slowdowns[2], (Algorithm::AStar, Slowdown::Baseline));
        assert!(matches!(slowdowns[0], (Algorithm::Bfs, Slowdown::Percent(p)) if (p - 50.0).abs() < 1e-9));
        assert!(matches!(slowdowns[1], (Algorithm::Ucs, Slowdown::Percent(p)) if (p - 100.0).abs() < 1e-9));
    }

    #[test]
    fn sub_microsecond_times_are_not_compared() {
        let mut runs = vec![
            run(Algorithm::Bfs, 3, Some(4)),
            run(Algorithm::Ucs, 4, Some(4)),
            run(Algorithm::AStar, 0, Some(4)),
        ];
        runs[2].average = Duration::from_nanos(500);
        let report = report(runs);
        assert!(report.slowdowns().iter().all(|(_, s)| *s == Slowdown::BelowResolution));
    }

    #[test]
    fn shortest_ignores_failed_runs_and_detects_disagreement() {
        let report = report(vec![
            run(Algorithm::Bfs, 10, None),
            run(Algorithm::Ucs, 10, Some(4)),
            run(Algorithm::AStar, 10, Some(3)),
        ]);
        assert_eq!(report.shortest().map(|r| r.algorithm), Some(Algorithm::AStar));
        assert!(!report.all_agree());
    }
}
