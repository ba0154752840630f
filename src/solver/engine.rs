//! Main solver interface

use super::strategy::{Algorithm, Pathfinder, SearchLimits, SearchReport};
use crate::core::{Ladder, Word};
use crate::dictionary::Dictionary;
use crate::error::LadderError;

/// Word ladder solver
///
/// Binds an algorithm and search limits to a dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    algorithm: Algorithm,
    dictionary: &'a Dictionary,
    limits: SearchLimits,
}

impl<'a> Solver<'a> {
    /// Create an unbounded solver
    #[must_use]
    pub const fn new(algorithm: Algorithm, dictionary: &'a Dictionary) -> Self {
        Self {
            algorithm,
            dictionary,
            limits: SearchLimits::UNBOUNDED,
        }
    }

    /// Bound every search this solver runs
    #[must_use]
    pub const fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Find a shortest ladder
    ///
    /// # Errors
    /// See [`Pathfinder::find_path_within`].
    pub fn find_path(&self, start: &str, end: &str) -> Result<Ladder, LadderError> {
        self.algorithm
            .find_path_within(start, end, self.dictionary, self.limits)
    }

    /// Search and report the number of expanded words
    ///
    /// # Errors
    /// See [`Pathfinder::search`].
    pub fn search(&self, start: &str, end: &str) -> Result<SearchReport, LadderError> {
        self.algorithm
            .search(start, end, self.dictionary, self.limits)
    }

    /// One-letter neighbors of `word` in this solver's dictionary
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<&'a Word> {
        super::neighbors(word, self.dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::fixtures::small_dictionary;

    #[test]
    fn solver_uses_its_algorithm() {
        let dictionary = small_dictionary();
        let solver = Solver::new(Algorithm::Bfs, &dictionary);
        assert_eq!(solver.algorithm(), Algorithm::Bfs);
        assert_eq!(solver.find_path("cat", "dog").unwrap().moves(), 4);
        assert_eq!(solver.search("cat", "dog").unwrap().expanded, 10);
    }

    #[test]
    fn solver_applies_limits() {
        let dictionary = small_dictionary();
        let solver = Solver::new(Algorithm::AStar, &dictionary).with_limits(SearchLimits::bounded(2));
        assert!(matches!(
            solver.find_path("cat", "dog"),
            Err(LadderError::SearchLimitExceeded { .. })
        ));
    }

    #[test]
    fn solver_lists_neighbors() {
        let dictionary = small_dictionary();
        let solver = Solver::new(Algorithm::default(), &dictionary);
        let bet = Word::new("bet").unwrap();
        let found: Vec<&str> = solver.neighbors(&bet).into_iter().map(Word::text).collect();
        assert_eq!(found, vec!["let", "set", "bat"]);
    }
}
