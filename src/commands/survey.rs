//! Algorithm survey
//!
//! Compares the search strategies over many random puzzles of one mode.

use super::compare::{CompareConfig, ComparisonReport, compare_algorithms};
use crate::dictionary::Dictionary;
use crate::error::LadderError;
use crate::game::{GameMode, WordPair, configure_mode, select_pair};
use crate::solver::Algorithm;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How a survey is run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyConfig {
    pub mode: GameMode,
    /// Algorithm that checks candidate pairs are solvable
    pub algorithm: Algorithm,
    /// Number of random pairs to compare on
    pub samples: usize,
    pub seed: Option<u64>,
    /// Per-pair comparison settings; pairs already run in parallel
    pub compare: CompareConfig,
    pub show_progress: bool,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Beginner,
            algorithm: Algorithm::default(),
            samples: 50,
            seed: None,
            compare: CompareConfig {
                runs: 1,
                ..CompareConfig::default()
            },
            show_progress: true,
        }
    }
}

/// Aggregate figures for one algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub mean_time: Duration,
    pub mean_expanded: f64,
    /// Times this algorithm was the fastest on a pair
    pub wins: usize,
}

/// Outcome of [`run_survey`]
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyReport {
    pub mode: GameMode,
    /// Pairs compared successfully
    pub pairs: usize,
    /// Pairs whose comparison failed
    pub failed: usize,
    /// Pairs on which all algorithms found ladders of equal length
    pub agreed: usize,
    pub summaries: Vec<AlgorithmSummary>,
    pub elapsed: Duration,
}

/// Compare the algorithms on `config.samples` random pairs
///
/// # Errors
/// Returns `LadderError::EmptyDictionary` or `LadderError::InsufficientDictionary` when
/// the dictionary cannot supply pairs for the mode.
pub fn run_survey(dictionary: &Dictionary, config: &SurveyConfig) -> Result<SurveyReport, LadderError> {
    let started = Instant::now();
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let mode_config = configure_mode(config.mode, dictionary, &mut rng)?;
    let pairs: Vec<WordPair> = (0..config.samples)
        .map(|_| select_pair(&mode_config, config.algorithm, &mut rng))
        .collect::<Result<_, _>>()?;

    let progress = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        progress.set_style(style.progress_chars("█▓▒░"));
    }
    progress.set_message(format!("{} pairs", config.mode));

    let playable = mode_config.playable_dictionary();
    let compare = CompareConfig {
        parallel: false,
        ..config.compare
    };
    let results: Vec<Result<ComparisonReport, LadderError>> = pairs
        .par_iter()
        .map(|pair| {
            let result = compare_algorithms(pair.start.text(), pair.end.text(), playable, compare);
            progress.inc(1);
            result
        })
        .collect();
    progress.finish_and_clear();

    let mut reports = Vec::with_capacity(results.len());
    let mut failed = 0;
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(err) => {
                debug!(error = %err, "Skipping pair");
                failed += 1;
            }
        }
    }

    let report = summarize(config.mode, &reports, failed, started.elapsed());
    info!(
        mode = %report.mode,
        pairs = report.pairs,
        agreed = report.agreed,
        failed,
        "Survey complete"
    );
    Ok(report)
}

fn summarize(
    mode: GameMode,
    reports: &[ComparisonReport],
    failed: usize,
    elapsed: Duration,
) -> SurveyReport {
    let pairs = reports.len();
    let summaries = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let runs = reports
                .iter()
                .filter_map(|report| report.runs.iter().find(|run| run.algorithm == algorithm));
            let (total_time, total_expanded) = runs
                .fold((Duration::ZERO, 0usize), |(time, expanded), run| {
                    (time + run.average, expanded + run.expanded)
                });
            let wins = reports
                .iter()
                .filter(|report| report.fastest().is_some_and(|run| run.algorithm == algorithm))
                .count();

            AlgorithmSummary {
                algorithm,
                mean_time: if pairs == 0 { Duration::ZERO } else { total_time / pairs as u32 },
                mean_expanded: if pairs == 0 { 0.0 } else { total_expanded as f64 / pairs as f64 },
                wins,
            }
        })
        .collect();

    SurveyReport {
        mode,
        pairs,
        failed,
        agreed: reports.iter().filter(|report| report.all_agree()).count(),
        summaries,
        elapsed,
    }
}
