//! Start/end word pair selection

use super::mode::{GameMode, ModeConfig};
use crate::core::Word;
use crate::error::LadderError;
use crate::solver::{Algorithm, Pathfinder};
use rand::Rng;
use rand::seq::index;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Random draws tried before settling for the mode's fallback pair
pub const MAX_PAIR_ATTEMPTS: usize = 100;

/// The puzzle: transform `start` into `end`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPair {
    pub start: Word,
    pub end: Word,
}

impl WordPair {
    /// # Errors
    /// Returns `LadderError::InvalidWord` if either side is not a word.
    pub fn new(start: impl AsRef<str>, end: impl AsRef<str>) -> Result<Self, LadderError> {
        Ok(Self {
            start: Word::new(start)?,
            end: Word::new(end)?,
        })
    }

    /// The known-solvable pair for `mode`
    #[must_use]
    pub fn fallback(mode: GameMode) -> Self {
        let (start, end) = mode.settings().fallback_pair;
        Self {
            start: Word::from_trusted(start),
            end: Word::from_trusted(end),
        }
    }
}

impl Default for WordPair {
    fn default() -> Self {
        Self::fallback(GameMode::Beginner)
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// Pick a random solvable pair for the configured mode
///
/// Draws two distinct playable words and keeps them if `algorithm` connects them with
/// a ladder of at least the mode's minimum length. After [`MAX_PAIR_ATTEMPTS`] failed
/// draws the mode's fallback pair is returned instead.
///
/// # Errors
/// Returns `LadderError::InsufficientDictionary` when fewer than two playable words
/// exist.
#[instrument(skip_all, fields(mode = %config.mode(), algorithm = %algorithm))]
pub fn select_pair<R: Rng + ?Sized>(
    config: &ModeConfig,
    algorithm: Algorithm,
    rng: &mut R,
) -> Result<WordPair, LadderError> {
    let mode = config.mode();
    let playable = config.playable_dictionary();
    let words = playable.sorted_words();
    if words.len() < 2 {
        return Err(LadderError::InsufficientDictionary {
            mode,
            length: mode.word_length(),
            found: words.len(),
        });
    }

    let min_words = mode.min_ladder_words();
    for attempt in 1..=MAX_PAIR_ATTEMPTS {
        let picks = index::sample(rng, words.len(), 2);
        let (start, end) = (words[picks.index(0)], words[picks.index(1)]);

        match algorithm.find_path(start.text(), end.text(), playable) {
            Ok(ladder) if ladder.len() >= min_words => {
                debug!(attempt, %start, %end, moves = ladder.moves(), "Selected word pair");
                return Ok(WordPair {
                    start: start.clone(),
                    end: end.clone(),
                });
            }
            Ok(ladder) => debug!(attempt, %start, %end, words = ladder.len(), "Ladder too short"),
            Err(err) => debug!(attempt, %start, %end, error = %err, "Pair rejected"),
        }
    }

    let fallback = WordPair::fallback(mode);
    warn!(attempts = MAX_PAIR_ATTEMPTS, pair = %fallback, "No random pair found, using fallback");
    Ok(fallback)
}

/// Read a fixed pair from a two-line file: start word, then end word
///
/// A missing file, fewer than two lines, or lines that are not words give the
/// default `cat → dog` pair.
#[must_use]
pub fn load_word_pair<P: AsRef<Path>>(path: P) -> WordPair {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Word pair file unavailable, using default pair");
            return WordPair::default();
        }
    };

    let mut lines = content.lines();
    let (Some(start), Some(end)) = (lines.next(), lines.next()) else {
        warn!(path = %path.display(), "Word pair file needs two lines, using default pair");
        return WordPair::default();
    };

    WordPair::new(start, end).unwrap_or_else(|err| {
        warn!(path = %path.display(), error = %err, "Invalid word pair, using default pair");
        WordPair::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::solver::fixtures::small_dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn fallback_pairs() {
        assert_eq!(WordPair::fallback(GameMode::Beginner).to_string(), "cat → dog");
        assert_eq!(WordPair::fallback(GameMode::Advanced).to_string(), "stone → smart");
        assert_eq!(WordPair::fallback(GameMode::Challenge).to_string(), "stone → shark");
        assert_eq!(WordPair::default(), WordPair::fallback(GameMode::Beginner));
    }

    #[test]
    fn fallback_pairs_are_solvable_with_builtin_dictionary() {
        let dictionary = Dictionary::builtin();
        for mode in GameMode::ALL {
            let pair = WordPair::fallback(mode);
            let config = ModeConfig::new(mode, &dictionary);
            let ladder = Algorithm::Bfs
                .find_path(pair.start.text(), pair.end.text(), config.playable_dictionary())
                .unwrap();
            assert!(ladder.len() >= mode.min_ladder_words(), "{mode}: {ladder}");
        }
    }

    #[test]
    fn selected_pairs_are_connected_and_long_enough() {
        let config = ModeConfig::new(GameMode::Beginner, &small_dictionary());
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let pair = select_pair(&config, Algorithm::AStar, &mut rng).unwrap();
            assert_ne!(pair.start, pair.end);
            let ladder = Algorithm::Bfs
                .find_path(pair.start.text(), pair.end.text(), config.playable_dictionary())
                .unwrap();
            assert!(ladder.len() >= 3);
        }
    }

    #[test]
    fn selection_is_reproducible_with_a_seed() {
        let config = ModeConfig::new(GameMode::Beginner, &small_dictionary());
        let first = select_pair(&config, Algorithm::Bfs, &mut StdRng::seed_from_u64(5)).unwrap();
        let second = select_pair(&config, Algorithm::Bfs, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn disconnected_dictionary_falls_back() {
        let config = ModeConfig::new(GameMode::Beginner, &Dictionary::from_words(["cat", "dog", "fig"]));
        let mut rng = StdRng::seed_from_u64(9);
        let pair = select_pair(&config, Algorithm::Ucs, &mut rng).unwrap();
        assert_eq!(pair, WordPair::fallback(GameMode::Beginner));
    }

    #[test]
    fn too_few_words_is_insufficient() {
        let config = ModeConfig::new(GameMode::Beginner, &Dictionary::from_words(["cat", "stone"]));
        let mut rng = StdRng::seed_from_u64(9);
        assert!(matches!(
            select_pair(&config, Algorithm::AStar, &mut rng),
            Err(LadderError::InsufficientDictionary { found: 1, length: 3, .. })
        ));
    }

    #[test]
    fn load_word_pair_reads_two_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Cold\nwarm").unwrap();
        let pair = load_word_pair(file.path());
        assert_eq!(pair.to_string(), "cold → warm");
    }

    #[test]
    fn load_word_pair_falls_back() {
        let mut short = tempfile::NamedTempFile::new().unwrap();
        writeln!(short, "cold").unwrap();
        assert_eq!(load_word_pair(short.path()), WordPair::default());

        let mut invalid = tempfile::NamedTempFile::new().unwrap();
        writeln!(invalid, "c0ld\nwarm").unwrap();
        assert_eq!(load_word_pair(invalid.path()), WordPair::default());

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_word_pair(dir.path().join("pair.txt")), WordPair::default());
    }
}
