//! Word ladder search
//!
//! Neighbor generation plus three shortest-ladder strategies sharing one contract.

mod astar;
mod breadth_first;
mod engine;
mod neighbors;
pub mod strategy;
mod tree;
mod uniform_cost;

pub use astar::AStarSearch;
pub use breadth_first::BreadthFirst;
pub use engine::Solver;
pub use neighbors::{ALPHABET, neighbors};
pub use strategy::{Algorithm, Pathfinder, SearchLimits, SearchReport};
pub use uniform_cost::UniformCost;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::dictionary::Dictionary;

    /// The small three-letter dictionary used throughout the search tests
    pub fn small_dictionary() -> Dictionary {
        Dictionary::from_words([
            "cat", "hat", "bat", "bet", "let", "set", "sit", "hit", "hot", "dot", "dog",
        ])
    }
}
