//! One-letter neighbor generation

use crate::core::Word;
use crate::dictionary::Dictionary;

/// Letters tried at every position, in expansion order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// All dictionary words that differ from `word` in exactly one position
///
/// Positions are varied left to right and letters a to z, which is the order the
/// searches expand in and therefore how they break ties between equal ladders.
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::dictionary::Dictionary;
/// use word_ladder::solver::neighbors;
///
/// let dictionary = Dictionary::from_words(["cat", "bat", "cot", "cab", "dog"]);
/// let cat = Word::new("cat").unwrap();
/// let found: Vec<&str> = neighbors(&cat, &dictionary).into_iter().map(Word::text).collect();
/// assert_eq!(found, vec!["bat", "cot", "cab"]);
/// ```
#[must_use]
pub fn neighbors<'d>(word: &Word, dictionary: &'d Dictionary) -> Vec<&'d Word> {
    let mut buffer = word.as_bytes().to_vec();
    let mut found = Vec::new();

    for position in 0..buffer.len() {
        let original = buffer[position];
        for &letter in ALPHABET {
            if letter == original {
                continue;
            }
            buffer[position] = letter;
            if let Ok(candidate) = std::str::from_utf8(&buffer)
                && let Some(neighbor) = dictionary.get(candidate)
            {
                found.push(neighbor);
            }
        }
        buffer[position] = original;
    }

    found
}
