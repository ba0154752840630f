//! Search strategies
//!
//! Defines the `Pathfinder` trait and the `Algorithm` selector.

use super::{AStarSearch, BreadthFirst, UniformCost};
use crate::core::{Ladder, Word};
use crate::dictionary::Dictionary;
use crate::error::LadderError;
use std::fmt;
use std::str::FromStr;

/// Optional bounds on search effort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Give up after expanding this many words
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No bound at all
    pub const UNBOUNDED: Self = Self {
        max_expansions: None,
    };

    #[must_use]
    pub const fn bounded(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Called before each expansion with the number of expansions so far
    pub(crate) fn check(self, expanded: usize) -> Result<(), LadderError> {
        match self.max_expansions {
            Some(max) if expanded >= max => Err(LadderError::SearchLimitExceeded { expanded }),
            _ => Ok(()),
        }
    }
}

/// Outcome of a completed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Shortest ladder found, `None` when the goal is unreachable
    pub ladder: Option<Ladder>,
    /// Number of words whose neighbors were generated
    pub expanded: usize,
}

impl SearchReport {
    pub(crate) const fn found(ladder: Ladder, expanded: usize) -> Self {
        Self {
            ladder: Some(ladder),
            expanded,
        }
    }

    pub(crate) const fn exhausted(expanded: usize) -> Self {
        Self {
            ladder: None,
            expanded,
        }
    }
}

/// A shortest-ladder search over a dictionary
pub trait Pathfinder {
    /// Run the search between two words already resolved against `dictionary`
    ///
    /// Implementations may assume `start != end`.
    ///
    /// # Errors
    /// Returns `LadderError::SearchLimitExceeded` when `limits` stop the search.
    fn explore<'d>(
        &self,
        start: &'d Word,
        end: &Word,
        dictionary: &'d Dictionary,
        limits: SearchLimits,
    ) -> Result<SearchReport, LadderError>;

    /// Search for a ladder and report the effort spent
    ///
    /// # Errors
    /// Returns `LadderError::NotInDictionary` without searching when either endpoint is
    /// missing, or `LadderError::SearchLimitExceeded` when `limits` stop the search.
    fn search(
        &self,
        start: &str,
        end: &str,
        dictionary: &Dictionary,
        limits: SearchLimits,
    ) -> Result<SearchReport, LadderError> {
        let start = resolve(start, dictionary)?;
        let end = resolve(end, dictionary)?;

        if start == end {
            return Ok(SearchReport::found(Ladder::single(start.clone()), 0));
        }

        self.explore(start, end, dictionary, limits)
    }

    /// Find a shortest ladder from `start` to `end`
    ///
    /// # Errors
    /// Returns `LadderError::NotInDictionary` if either word is missing and
    /// `LadderError::NoPathFound` if the words are not connected.
    fn find_path(&self, start: &str, end: &str, dictionary: &Dictionary) -> Result<Ladder, LadderError> {
        self.find_path_within(start, end, dictionary, SearchLimits::UNBOUNDED)
    }

    /// Like [`Pathfinder::find_path`], bounded by `limits`
    ///
    /// # Errors
    /// As `find_path`, plus `LadderError::SearchLimitExceeded`.
    fn find_path_within(
        &self,
        start: &str,
        end: &str,
        dictionary: &Dictionary,
        limits: SearchLimits,
    ) -> Result<Ladder, LadderError> {
        self.search(start, end, dictionary, limits)?
            .ladder
            .ok_or_else(|| LadderError::NoPathFound {
                start: start.to_string(),
                end: end.to_string(),
            })
    }
}

fn resolve<'d>(word: &str, dictionary: &'d Dictionary) -> Result<&'d Word, LadderError> {
    dictionary
        .get(word)
        .or_else(|| dictionary.get(&word.trim().to_lowercase()))
        .ok_or_else(|| LadderError::NotInDictionary(word.to_string()))
}

/// Selectable search algorithm
///
/// Static dispatch over the three strategies, chosen at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// Uniform-cost search
    Ucs,
    /// A* with the Hamming-distance heuristic
    #[default]
    AStar,
}

impl Algorithm {
    /// Every algorithm, in report order
    pub const ALL: [Self; 3] = [Self::Bfs, Self::Ucs, Self::AStar];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Ucs => "UCS",
            Self::AStar => "A*",
        }
    }
}

impl FromStr for Algorithm {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "ucs" | "uniform-cost" => Ok(Self::Ucs),
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            _ => Err(LadderError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Pathfinder for Algorithm {
    fn explore<'d>(
        &self,
        start: &'d Word,
        end: &Word,
        dictionary: &'d Dictionary,
        limits: SearchLimits,
    ) -> Result<SearchReport, LadderError> {
        match self {
            Self::Bfs => BreadthFirst.explore(start, end, dictionary, limits),
            Self::Ucs => UniformCost.explore(start, end, dictionary, limits),
            Self::AStar => AStarSearch.explore(start, end, dictionary, limits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::fixtures::small_dictionary;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_algorithm_finds_the_scenario_ladder() {
        let dictionary = small_dictionary();
        for algorithm in Algorithm::ALL {
            let ladder = algorithm.find_path("cat", "dog", &dictionary).unwrap();
            assert_eq!(ladder.to_string(), "cat → hat → hot → dot → dog", "{algorithm}");
            assert_eq!(ladder.moves(), 4);
        }
    }

    #[test]
    fn missing_endpoints_fail_before_searching() {
        let dictionary = small_dictionary();
        for algorithm in Algorithm::ALL {
            assert!(matches!(
                algorithm.find_path("cat", "cow", &dictionary),
                Err(LadderError::NotInDictionary(w)) if w == "cow"
            ));
            assert!(matches!(
                algorithm.find_path("zzz", "dog", &dictionary),
                Err(LadderError::NotInDictionary(w)) if w == "zzz"
            ));
        }
    }

    #[test]
    fn endpoints_are_case_insensitive() {
        let dictionary = small_dictionary();
        let ladder = Algorithm::Bfs.find_path("CAT", " Hat ", &dictionary).unwrap();
        assert_eq!(ladder.moves(), 1);
    }

    #[test]
    fn same_start_and_end_is_a_single_word_ladder() {
        let dictionary = small_dictionary();
        for algorithm in Algorithm::ALL {
            let report = algorithm
                .search("cat", "cat", &dictionary, SearchLimits::UNBOUNDED)
                .unwrap();
            assert_eq!(report.expanded, 0);
            assert_eq!(report.ladder.map(|l| l.len()), Some(1));
        }
    }

    #[test]
    fn unreachable_goal_is_no_path_found() {
        let dictionary = Dictionary::from_words(["cat", "cot", "dog", "dig"]);
        for algorithm in Algorithm::ALL {
            assert!(matches!(
                algorithm.find_path("cat", "dog", &dictionary),
                Err(LadderError::NoPathFound { .. })
            ));
            let report = algorithm
                .search("cat", "dog", &dictionary, SearchLimits::UNBOUNDED)
                .unwrap();
            assert!(report.ladder.is_none());
            assert_eq!(report.expanded, 2);
        }
    }

    #[test]
    fn different_lengths_are_unreachable() {
        let dictionary = Dictionary::from_words(["cat", "cats"]);
        assert!(matches!(
            Algorithm::AStar.find_path("cat", "cats", &dictionary),
            Err(LadderError::NoPathFound { .. })
        ));
    }

    #[test]
    fn expansion_limit_stops_the_search() {
        let dictionary = small_dictionary();
        for algorithm in Algorithm::ALL {
            let result =
                algorithm.find_path_within("cat", "dog", &dictionary, SearchLimits::bounded(1));
            assert!(matches!(
                result,
                Err(LadderError::SearchLimitExceeded { expanded: 1 })
            ));
        }
    }

    #[test]
    fn generous_limit_does_not_interfere() {
        let dictionary = small_dictionary();
        let ladder = Algorithm::Ucs
            .find_path_within("cat", "dog", &dictionary, SearchLimits::bounded(100))
            .unwrap();
        assert_eq!(ladder.moves(), 4);
    }

    #[test]
    fn astar_expands_no_more_than_bfs_on_the_scenario() {
        let dictionary = small_dictionary();
        let bfs = Algorithm::Bfs
            .search("cat", "dog", &dictionary, SearchLimits::UNBOUNDED)
            .unwrap();
        let astar = Algorithm::AStar
            .search("cat", "dog", &dictionary, SearchLimits::UNBOUNDED)
            .unwrap();
        assert!(astar.expanded <= bfs.expanded);
    }

    #[test]
    fn algorithm_names_parse() {
        assert_eq!("BFS".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!("ucs".parse::<Algorithm>().unwrap(), Algorithm::Ucs);
        assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("astar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("A-Star".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert!(matches!(
            "dijkstra".parse::<Algorithm>(),
            Err(LadderError::UnknownAlgorithm(name)) if name == "dijkstra"
        ));
    }

    #[test]
    fn algorithm_default_and_display() {
        assert_eq!(Algorithm::default(), Algorithm::AStar);
        let names: Vec<String> = Algorithm::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["BFS", "UCS", "A*"]);
    }

    proptest! {
        #[test]
        fn algorithms_agree_on_ladder_length(
            words in prop::collection::btree_set("[a-d]{3}", 2..40)
        ) {
            let words: BTreeSet<String> = words;
            let dictionary = Dictionary::from_words(&words);
            let start = words.first().unwrap();
            let end = words.last().unwrap();

            let bfs = Algorithm::Bfs.find_path(start, end, &dictionary).ok();
            let ucs = Algorithm::Ucs.find_path(start, end, &dictionary).ok();
            let astar = Algorithm::AStar.find_path(start, end, &dictionary).ok();

            prop_assert_eq!(&bfs, &ucs);
            prop_assert_eq!(bfs.as_ref().map(Ladder::len), astar.as_ref().map(Ladder::len));

            if let Some(ladder) = astar {
                prop_assert!(ladder.is_within(&dictionary));
                prop_assert!(ladder.words().windows(2).all(|p| p[0].is_one_letter_different(&p[1])));
                prop_assert_eq!(ladder.start().text(), start.as_str());
                prop_assert_eq!(ladder.end().text(), end.as_str());
            }
        }
    }
}
