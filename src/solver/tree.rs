//! Parent-pointer arena shared by the searches

use crate::core::{Ladder, Word};

struct Node<'d> {
    word: &'d Word,
    parent: Option<usize>,
}

/// Search tree stored as a flat arena
///
/// Node indices are assigned in insertion order, so an index doubles as the
/// tie-breaking sequence number for the priority-queue searches.
pub(crate) struct SearchTree<'d> {
    nodes: Vec<Node<'d>>,
}

impl<'d> SearchTree<'d> {
    pub(crate) const ROOT: usize = 0;

    pub(crate) fn new(root: &'d Word) -> Self {
        Self {
            nodes: vec![Node {
                word: root,
                parent: None,
            }],
        }
    }

    /// Add a child of `parent`, returning its index
    pub(crate) fn push(&mut self, word: &'d Word, parent: usize) -> usize {
        self.nodes.push(Node {
            word,
            parent: Some(parent),
        });
        self.nodes.len() - 1
    }

    pub(crate) fn word(&self, index: usize) -> &'d Word {
        self.nodes[index].word
    }

    /// Walk parent pointers back to the root
    pub(crate) fn ladder(&self, index: usize) -> Ladder {
        let mut words = Vec::new();
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            words.push(self.nodes[i].word.clone());
            cursor = self.nodes[i].parent;
        }
        words.reverse();
        Ladder::from_search(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_follows_parents() {
        let cat = Word::new("cat").unwrap();
        let cot = Word::new("cot").unwrap();
        let bat = Word::new("bat").unwrap();
        let dot = Word::new("dot").unwrap();

        let mut tree = SearchTree::new(&cat);
        let c = tree.push(&cot, SearchTree::ROOT);
        tree.push(&bat, SearchTree::ROOT);
        let d = tree.push(&dot, c);

        assert_eq!(d, 3);
        assert_eq!(tree.word(d), &dot);
        assert_eq!(tree.ladder(d).to_string(), "cat → cot → dot");
        assert_eq!(tree.ladder(SearchTree::ROOT).len(), 1);
    }
}
