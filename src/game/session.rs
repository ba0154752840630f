//! A single game: the move validator and its state

use super::mode::{EXTRA_TRIES, GameMode, ModeConfig};
use super::pair::WordPair;
use super::score::calculate_score;
use crate::core::{Ladder, Word};
use crate::error::LadderError;
use crate::solver::{Algorithm, Pathfinder};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Why a submitted word was not accepted
///
/// A rejected move never consumes a try.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("'{word}' is not a valid word")]
    NotInDictionary { word: String },
    #[error("'{word}' must differ from '{previous}' by exactly one letter")]
    NotAdjacent { word: String, previous: String },
    #[error("'{word}' is banned in this game")]
    BannedWord { word: String },
    #[error("'{word}' uses the restricted letter '{letter}'")]
    RestrictedLetter { word: String, letter: char },
    #[error("no tries left (limit is {max_tries})")]
    TriesExhausted { max_tries: usize },
    #[error("the puzzle is already solved")]
    AlreadySolved,
}

/// Result of an accepted move
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The ladder grew but has not reached the end word
    Advanced { word: Word, remaining_tries: usize },
    /// The end word was reached
    Won { word: Word, moves: usize, score: f64 },
}

/// Derived state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    OutOfTries,
}

/// What to do when the player has left the optimal ladder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HintPolicy {
    /// Suggest the optimal ladder's first move again
    #[default]
    FromStart,
    /// Search a fresh ladder from the current word
    Recompute,
}

impl FromStr for HintPolicy {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "from-start" | "start" => Ok(Self::FromStart),
            "recompute" => Ok(Self::Recompute),
            _ => Err(LadderError::UnknownHintPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for HintPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FromStart => "from-start",
            Self::Recompute => "recompute",
        })
    }
}

/// A suggested next move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Next(Word),
    /// The current word already is the end word
    AtGoal,
    /// No ladder leads from the current word to the end word
    Unreachable,
}

/// Try budget for a puzzle whose optimal ladder takes `min_tries` moves
#[must_use]
pub fn max_tries_for(mode: GameMode, min_tries: usize) -> usize {
    (min_tries + EXTRA_TRIES)
        .min(mode.try_ceiling())
        .max(min_tries)
}

/// One puzzle being played
#[derive(Debug, Clone)]
pub struct Session {
    pair: WordPair,
    config: ModeConfig,
    algorithm: Algorithm,
    optimal: Ladder,
    min_tries: usize,
    max_tries: usize,
    tries: Vec<Word>,
}

impl Session {
    /// Start a session, computing the optimal ladder once
    ///
    /// # Errors
    /// Returns the search error if `algorithm` cannot connect the pair within the
    /// playable dictionary.
    #[instrument(skip_all, fields(pair = %pair, mode = %config.mode(), algorithm = %algorithm))]
    pub fn start(pair: WordPair, config: ModeConfig, algorithm: Algorithm) -> Result<Self, LadderError> {
        let optimal = algorithm.find_path(
            pair.start.text(),
            pair.end.text(),
            config.playable_dictionary(),
        )?;
        let min_tries = optimal.moves();
        let max_tries = max_tries_for(config.mode(), min_tries);
        info!(min_tries, max_tries, "Session started");

        Ok(Self {
            pair,
            config,
            algorithm,
            optimal,
            min_tries,
            max_tries,
            tries: Vec::new(),
        })
    }

    /// Validate and apply a move
    ///
    /// # Errors
    /// Returns the first rule the word breaks; the session is left unchanged.
    pub fn submit_move(&mut self, input: &str) -> Result<MoveOutcome, InvalidMove> {
        let text = input.trim().to_lowercase();

        if self.is_won() {
            return Err(InvalidMove::AlreadySolved);
        }
        if self.tries.len() >= self.max_tries {
            return Err(InvalidMove::TriesExhausted {
                max_tries: self.max_tries,
            });
        }

        if let Some(letter) = self.config.restricted_letter_in(&text) {
            return Err(InvalidMove::RestrictedLetter { word: text, letter });
        }
        if self.config.is_banned(&text) {
            return Err(InvalidMove::BannedWord { word: text });
        }

        let Some(word) = self.config.active_dictionary().get(&text) else {
            return Err(InvalidMove::NotInDictionary { word: text });
        };
        let previous = self.current();
        if !word.is_one_letter_different(previous) {
            return Err(InvalidMove::NotAdjacent {
                word: text,
                previous: previous.to_string(),
            });
        }

        let word = word.clone();
        self.tries.push(word.clone());
        debug!(%word, tries = self.tries.len(), "Move accepted");

        if word == self.pair.end {
            Ok(MoveOutcome::Won {
                word,
                moves: self.tries.len(),
                score: self.score(),
            })
        } else {
            Ok(MoveOutcome::Advanced {
                word,
                remaining_tries: self.remaining_tries(),
            })
        }
    }

    /// Truncate the ladder to its first `index` moves, returning the removed words
    ///
    /// Does nothing when `index` is at or past the end.
    pub fn remove_from_index(&mut self, index: usize) -> Vec<Word> {
        if index >= self.tries.len() {
            return Vec::new();
        }
        self.tries.split_off(index)
    }

    /// Remove the last move
    pub fn undo(&mut self) -> Option<Word> {
        self.tries.pop()
    }

    /// Remove every move
    pub fn reset(&mut self) {
        self.tries.clear();
    }

    /// Replace the moves with the optimal ladder
    pub fn auto_solve(&mut self) {
        self.tries = self.optimal.words()[1..].to_vec();
    }

    /// Suggest the next move
    #[must_use]
    pub fn hint(&self, policy: HintPolicy) -> Hint {
        let current = self.current();
        if *current == self.pair.end {
            return Hint::AtGoal;
        }

        if self.optimal.position(current.text()).is_some() {
            return self
                .optimal
                .next_after(current.text())
                .cloned()
                .map_or(Hint::AtGoal, Hint::Next);
        }

        match policy {
            HintPolicy::FromStart => self.optimal.get(1).cloned().map_or(Hint::AtGoal, Hint::Next),
            HintPolicy::Recompute => match self.algorithm.find_path(
                current.text(),
                self.pair.end.text(),
                self.config.playable_dictionary(),
            ) {
                Ok(ladder) => ladder.get(1).cloned().map_or(Hint::AtGoal, Hint::Next),
                Err(err) => {
                    debug!(error = %err, "No ladder from current word");
                    Hint::Unreachable
                }
            },
        }
    }

    /// Score for the moves made so far
    #[must_use]
    pub fn score(&self) -> f64 {
        calculate_score(self.tries.len(), self.min_tries, self.max_tries)
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.is_won() {
            SessionStatus::Won
        } else if self.tries.len() >= self.max_tries {
            SessionStatus::OutOfTries
        } else {
            SessionStatus::InProgress
        }
    }

    /// The ladder ends on the end word; a pair whose start is its end is won from the outset
    #[must_use]
    pub fn is_won(&self) -> bool {
        *self.current() == self.pair.end
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != SessionStatus::InProgress
    }

    /// Last accepted word, or the start word before any move
    #[must_use]
    pub fn current(&self) -> &Word {
        self.tries.last().unwrap_or(&self.pair.start)
    }

    #[must_use]
    pub fn tries(&self) -> &[Word] {
        &self.tries
    }

    #[must_use]
    pub fn remaining_tries(&self) -> usize {
        self.max_tries.saturating_sub(self.tries.len())
    }

    #[must_use]
    pub const fn pair(&self) -> &WordPair {
        &self.pair
    }

    #[must_use]
    pub const fn start_word(&self) -> &Word {
        &self.pair.start
    }

    #[must_use]
    pub const fn end_word(&self) -> &Word {
        &self.pair.end
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.config.mode()
    }

    #[must_use]
    pub const fn config(&self) -> &ModeConfig {
        &self.config
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn optimal_ladder(&self) -> &Ladder {
        &self.optimal
    }

    #[must_use]
    pub const fn min_tries(&self) -> usize {
        self.min_tries
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }
}
