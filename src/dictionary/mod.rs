//! Dictionary index
//!
//! Stores the set of valid words partitioned by length, and provides the embedded
//! default word list used when no dictionary file is available.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::{load_dictionary, load_dictionary_or_builtin, parse_word_list};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// A set of unique words, indexed by word length
///
/// Every membership query only touches the partition for the query's length, so
/// searching a mixed-length dictionary costs the same as searching one length.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    partitions: BTreeMap<usize, FxHashSet<Word>>,
    len: usize,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded default dictionary
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(DEFAULT_WORDS.iter().copied())
    }

    /// Build a dictionary from strings, skipping anything that is not a valid word
    ///
    /// # Examples
    /// ```
    /// use word_ladder::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "Dog", "c4t", "cat"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("dog"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter_map(|w| Word::new(w).ok())
            .collect()
    }

    /// Add a word; returns false if it was already present
    pub fn insert(&mut self, word: Word) -> bool {
        let inserted = self.partitions.entry(word.len()).or_default().insert(word);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.partitions
            .get(&word.len())
            .is_some_and(|partition| partition.contains(word))
    }

    /// Look up the stored entry for `word`
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.partitions.get(&word.len())?.get(word)
    }

    /// Total number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Word lengths present, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.partitions.keys().copied()
    }

    /// Number of words of the given length
    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.partitions.get(&length).map_or(0, FxHashSet::len)
    }

    /// Iterate over the words of one length, in no particular order
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &Word> {
        self.partitions.get(&length).into_iter().flatten()
    }

    /// Iterate over all words, grouped by ascending length
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.partitions.values().flatten()
    }

    /// All words in lexical order
    ///
    /// Random draws go through this list so a seeded generator always sees the same
    /// sequence of candidates.
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.iter().collect();
        words.sort_unstable();
        words
    }

    /// A new dictionary holding only the words of `length`
    #[must_use]
    pub fn with_length(&self, length: usize) -> Self {
        self.words_of_length(length).cloned().collect()
    }

    /// A new dictionary holding the words for which `keep` returns true
    #[must_use]
    pub fn filtered(&self, keep: impl Fn(&Word) -> bool) -> Self {
        self.iter().filter(|w| keep(w)).cloned().collect()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl Extend<Word> for Dictionary {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words(["cat", "hat", "dog", "stone", "shone", "a"])
    }

    #[test]
    fn builtin_dictionary_matches_embedded_count() {
        let dictionary = Dictionary::builtin();
        assert_eq!(dictionary.len(), DEFAULT_WORDS_COUNT);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("stone"));
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in DEFAULT_WORDS {
            assert!(
                !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()),
                "Word '{word}' is not lowercase ASCII"
            );
        }
    }

    #[test]
    fn partitions_by_length() {
        let dictionary = sample();
        assert_eq!(dictionary.len(), 6);
        assert_eq!(dictionary.lengths().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(dictionary.count_of_length(3), 3);
        assert_eq!(dictionary.count_of_length(5), 2);
        assert_eq!(dictionary.count_of_length(4), 0);
    }

    #[test]
    fn insert_enforces_uniqueness() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary.insert(Word::new("cat").unwrap()));
        assert!(!dictionary.insert(Word::new("CAT").unwrap()));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn contains_and_get() {
        let dictionary = sample();
        assert!(dictionary.contains("dog"));
        assert!(!dictionary.contains("dot"));
        assert!(!dictionary.contains(""));
        assert_eq!(dictionary.get("hat").map(Word::text), Some("hat"));
    }

    #[test]
    fn with_length_keeps_one_partition() {
        let active = sample().with_length(3);
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|w| w.len() == 3));
    }

    #[test]
    fn filtered_applies_predicate() {
        let without_t = sample().filtered(|w| !w.has_letter(b't'));
        assert_eq!(without_t.len(), 3);
        assert!(without_t.contains("dog"));
        assert!(without_t.contains("shone"));
        assert!(without_t.contains("a"));
    }

    #[test]
    fn sorted_words_are_lexical() {
        let dictionary = sample();
        let sorted: Vec<&str> = dictionary.sorted_words().into_iter().map(Word::text).collect();
        assert_eq!(sorted, vec!["a", "cat", "dog", "hat", "shone", "stone"]);
    }
}
