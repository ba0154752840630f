//! Error types for the word ladder engine.

use crate::core::WordError;
use crate::game::{GameMode, InvalidMove};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for word ladder operations.
pub type LadderResult<T> = Result<T, LadderError>;

/// Errors that can occur while loading words, searching or playing.
#[derive(Debug, Error)]
pub enum LadderError {
    /// The dictionary file is missing or unreadable.
    #[error("failed to read dictionary {}: {source}", .path.display())]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A search endpoint is not a dictionary word.
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),

    /// The search exhausted its frontier without reaching the end word.
    #[error("no ladder connects '{start}' to '{end}'")]
    NoPathFound { start: String, end: String },

    /// A bounded search hit its expansion limit.
    #[error("search gave up after expanding {expanded} words")]
    SearchLimitExceeded { expanded: usize },

    /// Search strategy name outside BFS, UCS and A*.
    #[error("unknown algorithm '{0}' (expected BFS, UCS or A*)")]
    UnknownAlgorithm(String),

    /// Game mode name outside Beginner, Advanced and Challenge.
    #[error("unknown game mode '{0}' (expected beginner, advanced or challenge)")]
    UnknownMode(String),

    /// Hint policy name outside from-start and recompute.
    #[error("unknown hint policy '{0}' (expected from-start or recompute)")]
    UnknownHintPolicy(String),

    /// Fewer than two usable words for a mode.
    #[error("{mode} mode needs at least two {length}-letter words, found {found}")]
    InsufficientDictionary {
        mode: GameMode,
        length: usize,
        found: usize,
    },

    /// No words at all of the length a mode needs.
    #[error("no {length}-letter words available")]
    EmptyDictionary { length: usize },

    /// A sequence of words that is not a valid ladder.
    #[error("malformed ladder: {0}")]
    MalformedLadder(String),

    /// A rejected move.
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    /// Input that is not a word at all.
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}
