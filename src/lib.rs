//! Word Ladder
//!
//! A word ladder solver and game engine: transform a start word into an end word one
//! letter at a time, with every intermediate word taken from a dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::dictionary::Dictionary;
//! use word_ladder::solver::{Algorithm, Pathfinder};
//!
//! let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
//!
//! let ladder = Algorithm::AStar.find_path("cat", "dog", &dictionary).unwrap();
//! assert_eq!(ladder.to_string(), "cat → cot → cog → dog");
//! assert_eq!(ladder.moves(), 3);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word storage and loading
pub mod dictionary;

// Search algorithms
pub mod solver;

// Game rules: modes, pair selection, sessions and scoring
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{LadderError, LadderResult};
