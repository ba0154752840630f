//! Uniform-cost search

use super::neighbors;
use super::strategy::{Pathfinder, SearchLimits, SearchReport};
use super::tree::SearchTree;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::LadderError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Cost of a single letter change
const STEP_COST: usize = 1;

/// Min-heap on (accumulated cost, insertion sequence) with lazy deletion
///
/// With unit step costs and FIFO tie-breaking it pops words in exactly the order
/// breadth-first search dequeues them.
pub struct UniformCost;

impl Pathfinder for UniformCost {
    fn explore<'d>(
        &self,
        start: &'d Word,
        end: &Word,
        dictionary: &'d Dictionary,
        limits: SearchLimits,
    ) -> Result<SearchReport, LadderError> {
        let mut tree = SearchTree::new(start);
        let mut best_cost: FxHashMap<&'d str, usize> = FxHashMap::default();
        let mut finalized: FxHashSet<&'d str> = FxHashSet::default();
        let mut frontier = BinaryHeap::new();
        best_cost.insert(start.text(), 0);
        frontier.push(Reverse((0, SearchTree::ROOT)));
        let mut expanded = 0;

        while let Some(Reverse((cost, node))) = frontier.pop() {
            let word = tree.word(node);
            if !finalized.insert(word.text()) {
                continue;
            }
            if word == end {
                return Ok(SearchReport::found(tree.ladder(node), expanded));
            }

            limits.check(expanded)?;
            expanded += 1;

            let next_cost = cost + STEP_COST;
            for next in neighbors(word, dictionary) {
                if finalized.contains(next.text())
                    || best_cost.get(next.text()).is_some_and(|&c| c <= next_cost)
                {
                    continue;
                }
                best_cost.insert(next.text(), next_cost);
                frontier.push(Reverse((next_cost, tree.push(next, node))));
            }
        }

        Ok(SearchReport::exhausted(expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BreadthFirst;
    use crate::solver::fixtures::small_dictionary;

    #[test]
    fn ucs_matches_bfs_expansion_count() {
        let dictionary = small_dictionary();
        let ucs = UniformCost
            .search("cat", "dog", &dictionary, SearchLimits::UNBOUNDED)
            .unwrap();
        let bfs = BreadthFirst
            .search("cat", "dog", &dictionary, SearchLimits::UNBOUNDED)
            .unwrap();
        assert_eq!(ucs, bfs);
    }

    #[test]
    fn ucs_on_five_letter_words() {
        let dictionary = Dictionary::from_words(["stone", "shone", "shore", "share", "shark"]);
        let ladder = UniformCost.find_path("stone", "shark", &dictionary).unwrap();
        assert_eq!(ladder.to_string(), "stone → shone → shore → share → shark");
    }
}
