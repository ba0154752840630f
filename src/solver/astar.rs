//! A* search with the Hamming-distance heuristic

use super::neighbors;
use super::strategy::{Pathfinder, SearchLimits, SearchReport};
use super::tree::SearchTree;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::LadderError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap on (cost + heuristic, cost, insertion sequence)
///
/// The heuristic is the number of positions still differing from the goal. One letter
/// change alters at most one position, so it never overestimates and is consistent:
/// a word popped once is final.
pub struct AStarSearch;

impl Pathfinder for AStarSearch {
    fn explore<'d>(
        &self,
        start: &'d Word,
        end: &Word,
        dictionary: &'d Dictionary,
        limits: SearchLimits,
    ) -> Result<SearchReport, LadderError> {
        let mut tree = SearchTree::new(start);
        let mut best_cost: FxHashMap<&'d str, usize> = FxHashMap::default();
        let mut closed: FxHashSet<&'d str> = FxHashSet::default();
        let mut frontier = BinaryHeap::new();
        best_cost.insert(start.text(), 0);
        frontier.push(Reverse((start.hamming_distance(end), 0, SearchTree::ROOT)));
        let mut expanded = 0;

        while let Some(Reverse((_, cost, node))) = frontier.pop() {
            let word = tree.word(node);
            if !closed.insert(word.text()) {
                continue;
            }
            if word == end {
                return Ok(SearchReport::found(tree.ladder(node), expanded));
            }

            limits.check(expanded)?;
            expanded += 1;

            let next_cost = cost + 1;
            for next in neighbors(word, dictionary) {
                if closed.contains(next.text())
                    || best_cost.get(next.text()).is_some_and(|&c| c <= next_cost)
                {
                    continue;
                }
                best_cost.insert(next.text(), next_cost);
                let priority = next_cost + next.hamming_distance(end);
                frontier.push(Reverse((priority, next_cost, tree.push(next, node))));
            }
        }

        Ok(SearchReport::exhausted(expanded))
    }
}
