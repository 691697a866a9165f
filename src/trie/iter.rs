extern crate alloc;

use alloc::vec::Vec;
use core::iter::FusedIterator;

use super::TrieNode;

/// Lazy depth first walk below a prefix of a [`Trie`][super::Trie], yielding `(word, count)`
/// for every word ending at or below the prefix node.
///
/// Words come out in lexicographic symbol order, they are not ranked by count.
/// Created by [`Trie::completions`][super::Trie::completions] and [`Trie::words`][super::Trie::words].
pub struct Completions<'a, S> {
    /// pending nodes with the length of the word they end
    stack: Vec<(usize, &'a TrieNode<S>)>,
    /// symbols from the root to the last visited node
    path: Vec<S>,
    /// length of the prefix the walk started from
    base: usize,
}

impl<'a, S: Ord + Clone> Completions<'a, S> {
    pub(super) fn new(start: &'a TrieNode<S>, prefix: Vec<S>) -> Self {
        let base = prefix.len();

        Self {
            stack: alloc::vec![(base, start)],
            path: prefix,
            base,
        }
    }

    pub(super) const fn empty() -> Self {
        Self {
            stack: Vec::new(),
            path: Vec::new(),
            base: 0,
        }
    }
}

impl<S: Ord + Clone> Iterator for Completions<'_, S> {
    type Item = (Vec<S>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, node)) = self.stack.pop() {
            // the start node's symbol is already the last one of the prefix
            if depth > self.base {
                self.path.truncate(depth - 1);
                self.path.extend(node.symbol().cloned());
            }

            // reversed so the smallest symbol is popped first
            self.stack
                .extend(node.children().rev().map(|child| (depth + 1, child)));

            if node.is_end() {
                return Some((self.path.clone(), node.count()));
            }
        }

        None
    }
}

impl<S: Ord + Clone> FusedIterator for Completions<'_, S> {}
