//! Word ladders
//!
//! A ladder is an ordered sequence of words in which each consecutive pair differs by
//! exactly one letter.

use super::Word;
use crate::dictionary::Dictionary;
use crate::error::LadderError;
use std::fmt;

/// A non-empty sequence of words, each one letter away from the previous
///
/// A ladder of length 1 is a puzzle whose start and end coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    /// Build a ladder, checking that consecutive words differ by exactly one letter
    ///
    /// # Errors
    /// Returns `LadderError::MalformedLadder` if the sequence is empty or any step
    /// changes more or fewer than one letter.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Ladder, Word};
    ///
    /// let words = ["cat", "cot", "dot"].map(|w| Word::new(w).unwrap()).to_vec();
    /// let ladder = Ladder::new(words).unwrap();
    /// assert_eq!(ladder.moves(), 2);
    ///
    /// let broken = ["cat", "dog"].map(|w| Word::new(w).unwrap()).to_vec();
    /// assert!(Ladder::new(broken).is_err());
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self, LadderError> {
        if words.is_empty() {
            return Err(LadderError::MalformedLadder("a ladder needs at least one word".into()));
        }

        if let Some(step) = words
            .windows(2)
            .find(|pair| !pair[0].is_one_letter_different(&pair[1]))
        {
            return Err(LadderError::MalformedLadder(format!(
                "'{}' → '{}' does not change exactly one letter",
                step[0], step[1]
            )));
        }

        Ok(Self { words })
    }

    /// A ladder holding a single word
    #[must_use]
    pub fn single(word: Word) -> Self {
        Self { words: vec![word] }
    }

    /// Build a ladder from search output, which is adjacent by construction
    pub(crate) fn from_search(words: Vec<Word>) -> Self {
        debug_assert!(!words.is_empty());
        debug_assert!(
            words
                .windows(2)
                .all(|pair| pair[0].is_one_letter_different(&pair[1]))
        );
        Self { words }
    }

    /// All words, start first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words, including start and end
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Ladders are never empty
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Number of single-letter changes (words minus one)
    #[inline]
    #[must_use]
    pub fn moves(&self) -> usize {
        self.words.len() - 1
    }

    /// First word of the ladder
    #[must_use]
    pub fn start(&self) -> &Word {
        &self.words[0]
    }

    /// Last word of the ladder
    #[must_use]
    pub fn end(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Word at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Index of `word` in the ladder
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// The word that follows `word` on this ladder
    ///
    /// `None` if `word` is not on the ladder or is its last word.
    #[must_use]
    pub fn next_after(&self, word: &str) -> Option<&Word> {
        self.position(word).and_then(|index| self.words.get(index + 1))
    }

    /// Check whether every word on the ladder is in `dictionary`
    #[must_use]
    pub fn is_within(&self, dictionary: &Dictionary) -> bool {
        self.words.iter().all(|w| dictionary.contains(w.text()))
    }

    /// Iterate over the words, start first
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
