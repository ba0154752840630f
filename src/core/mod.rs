//! Core domain types for word ladders
//!
//! Words and ladders. Everything here is pure and has clear structural properties.

mod ladder;
mod word;

pub use ladder::Ladder;
pub use word::{Word, WordError, hamming_distance, is_one_letter_different};
