//! Breadth-first search

use super::neighbors;
use super::strategy::{Pathfinder, SearchLimits, SearchReport};
use super::tree::SearchTree;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::LadderError;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// FIFO frontier; words are marked visited when enqueued and goal-tested when dequeued
pub struct BreadthFirst;

impl Pathfinder for BreadthFirst {
    fn explore<'d>(
        &self,
        start: &'d Word,
        end: &Word,
        dictionary: &'d Dictionary,
        limits: SearchLimits,
    ) -> Result<SearchReport, LadderError> {
        let mut tree = SearchTree::new(start);
        let mut visited: FxHashSet<&'d str> = FxHashSet::default();
        visited.insert(start.text());
        let mut frontier = VecDeque::from([SearchTree::ROOT]);
        let mut expanded = 0;

        while let Some(node) = frontier.pop_front() {
            let word = tree.word(node);
            if word == end {
                return Ok(SearchReport::found(tree.ladder(node), expanded));
            }

            limits.check(expanded)?;
            expanded += 1;

            for next in neighbors(word, dictionary) {
                if visited.insert(next.text()) {
                    frontier.push_back(tree.push(next, node));
                }
            }
        }

        Ok(SearchReport::exhausted(expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::fixtures::small_dictionary;

    #[test]
    fn bfs_expands_in_discovery_order() {
        let dictionary = small_dictionary();
        let report = BreadthFirst
            .search("cat", "dog", &dictionary, SearchLimits::UNBOUNDED)
            .unwrap();
        // cat bat hat bet hit hot let set sit dot
        assert_eq!(report.expanded, 10);
        assert_eq!(report.ladder.unwrap().moves(), 4);
    }

    #[test]
    fn bfs_finds_adjacent_goal() {
        let dictionary = small_dictionary();
        let ladder = BreadthFirst.find_path("hot", "dot", &dictionary).unwrap();
        assert_eq!(ladder.to_string(), "hot → dot");
    }
}
