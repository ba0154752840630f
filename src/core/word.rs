//! Word representation
//!
//! A Word is a lowercase ASCII string treated as an opaque symbol. Equality and the
//! per-position difference count are the only operations the ladder rules need.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A dictionary word of any length
///
/// Stored lowercase. Hashes and compares exactly like its text, so word sets can be
/// queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Stone").unwrap();
    /// assert_eq!(word.text(), "stone");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Build a word from text already known to be lowercase ASCII letters
    pub(crate) fn from_trusted(text: &str) -> Self {
        debug_assert!(!text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase()));
        Self {
            text: text.to_string(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (always ASCII lowercase)
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Words are never empty
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.as_bytes().contains(&letter)
    }

    /// Count of positions at which the two words differ
    #[inline]
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> usize {
        hamming_distance(self.text(), other.text())
    }

    /// True when both words have the same length and differ in exactly one position
    #[inline]
    #[must_use]
    pub fn is_one_letter_different(&self, other: &Self) -> bool {
        is_one_letter_different(self.text(), other.text())
    }
}

/// Count the positions at which two strings differ
///
/// Strings of different lengths also count every unmatched trailing position, so the
/// result is never zero for unequal strings.
///
/// # Examples
/// ```
/// use word_ladder::core::hamming_distance;
///
/// assert_eq!(hamming_distance("cat", "cot"), 1);
/// assert_eq!(hamming_distance("cat", "dog"), 3);
/// assert_eq!(hamming_distance("cat", "cats"), 1);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> usize {
    let differing = a
        .bytes()
        .zip(b.bytes())
        .filter(|(left, right)| left != right)
        .count();
    differing + a.len().abs_diff(b.len())
}

/// Check if two words differ by exactly one letter
///
/// Always false for words of different lengths.
///
/// # Examples
/// ```
/// use word_ladder::core::is_one_letter_different;
///
/// assert!(is_one_letter_different("cat", "bat"));
/// assert!(!is_one_letter_different("cat", "dog"));
/// assert!(!is_one_letter_different("cat", "cats"));
/// ```
#[must_use]
pub fn is_one_letter_different(a: &str, b: &str) -> bool {
    a.len() == b.len() && hamming_distance(a, b) == 1
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("stone").unwrap();
        assert_eq!(word.text(), "stone");
        assert_eq!(word.as_bytes(), b"stone");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("CAT").unwrap().text(), "cat");
        assert_eq!(Word::new("  DoG\n").unwrap().text(), "dog");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("ladders").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cat!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("cat").unwrap();
        assert!(word.has_letter(b'a'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn one_letter_different_examples() {
        assert!(is_one_letter_different("cat", "bat"));
        assert!(is_one_letter_different("cat", "cot"));
        assert!(is_one_letter_different("cat", "cab"));
        assert!(!is_one_letter_different("cat", "cat"));
        assert!(!is_one_letter_different("cat", "dog"));
        assert!(!is_one_letter_different("cat", "cats"));
        assert!(!is_one_letter_different("cat", "at"));
    }

    #[test]
    fn hamming_distance_examples() {
        assert_eq!(hamming_distance("cat", "cat"), 0);
        assert_eq!(hamming_distance("cat", "dog"), 3);
        assert_eq!(hamming_distance("stone", "shone"), 1);
        assert_eq!(hamming_distance("cat", "catch"), 2);
    }

    #[test]
    fn word_methods_match_free_functions() {
        let cat = Word::new("cat").unwrap();
        let bat = Word::new("bat").unwrap();
        let dog = Word::new("dog").unwrap();
        assert!(cat.is_one_letter_different(&bat));
        assert!(!cat.is_one_letter_different(&dog));
        assert_eq!(cat.hamming_distance(&dog), 3);
    }

    #[test]
    fn word_borrows_as_str_for_set_lookups() {
        let mut set = std::collections::HashSet::new();
        set.insert(Word::new("cat").unwrap());
        assert!(set.contains("cat"));
        assert!(!set.contains("dog"));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Hot".parse().unwrap();
        assert_eq!(format!("{word}"), "hot");
        assert_eq!(word, "hot");
    }

    proptest! {
        #[test]
        fn one_letter_different_iff_single_position_differs(
            a in "[a-e]{1,5}",
            b in "[a-e]{1,5}",
        ) {
            let positions = a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count();
            let expected = a.len() == b.len() && positions == 1;
            prop_assert_eq!(is_one_letter_different(&a, &b), expected);
        }

        #[test]
        fn hamming_distance_is_symmetric(a in "[a-z]{3}", b in "[a-z]{3}") {
            prop_assert_eq!(hamming_distance(&a, &b), hamming_distance(&b, &a));
            prop_assert_eq!(hamming_distance(&a, &b) == 0, a == b);
        }
    }
}
