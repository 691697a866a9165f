//! A counting prefix tree, this module contains the [`Trie`] type.

extern crate alloc;

use alloc::{string::String, vec::Vec};
use core::{borrow::Borrow, fmt};

mod iter;
pub use iter::Completions;
mod node;
pub use node::TrieNode;

/// A prefix tree over symbols of type `S` that counts how often each word was inserted.
///
/// Words are any sequence of symbols, `Trie<char>` has `&str` conveniences
/// ([`insert_str`](Trie::insert_str), [`query_str`](Trie::query_str)) and `Trie<u8>` works on bytes.
/// Symbols are compared exactly, no case folding or normalization is done.
///
/// Nodes are created lazily on insertion and never removed.
///
/// # Examples
/// ```rust
/// use minheap_trie::Trie;
///
/// let mut trie = Trie::new();
///
/// for word in ["car", "cat", "card", "cat"] {
///     trie.insert_str(word);
/// }
///
/// assert_eq!(
///     trie.query_str("ca"),
///     vec![
///         ("cat".to_owned(), 2),
///         ("car".to_owned(), 1),
///         ("card".to_owned(), 1),
///     ]
/// );
///
/// assert!(trie.query_str("dog").is_empty());
/// ```
#[derive(PartialEq, Eq)]
pub struct Trie<S> {
    root: TrieNode<S>,
    words: usize,
}

impl<S: Ord + Clone + fmt::Debug> fmt::Debug for Trie<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Trie")?;
        f.debug_map().entries(self.words()).finish()
    }
}

impl<S: Ord + Clone> Clone for Trie<S> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            words: self.words,
        }
    }
}

impl<S: Ord> Default for Trie<S> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<S: Ord> Trie<S> {
    /// Creates a trie holding only the empty prefix root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            words: 0,
        }
    }

    /// Inserts `word`, following existing edges and creating missing nodes, then counts one
    /// more insertion on the node the word ends at.
    ///
    /// Inserting the empty word marks the root itself as an end.
    ///
    /// This operation is `O(m log k)` for a word of length `m` and nodes with at most `k` children.
    pub fn insert<W>(&mut self, word: W)
    where
        W: IntoIterator<Item = S>,
        S: Clone,
    {
        let mut node = &mut self.root;

        for symbol in word {
            node = node.child_or_insert(symbol);
        }

        if node.mark_end() {
            self.words += 1;
        }
    }

    /// Returns every word starting with `prefix` together with its insertion count,
    /// ranked by count from most to least inserted.
    ///
    /// Words with equal counts are ordered lexicographically by symbol.
    /// A prefix that leads nowhere gives an empty result, and the empty prefix gives every word.
    pub fn query<P>(&self, prefix: P) -> Vec<(Vec<S>, usize)>
    where
        P: IntoIterator,
        P::Item: Borrow<S>,
        S: Clone,
    {
        let mut found = self.completions(prefix).collect::<Vec<_>>();

        // completions arrive in symbol order and the sort is stable
        found.sort_by(|(_, a), (_, b)| b.cmp(a));

        found
    }

    /// Lazily walks every word starting with `prefix` in lexicographic symbol order.
    ///
    /// Unlike [`query`](Trie::query) this does not rank the words by count.
    #[must_use]
    pub fn completions<P>(&self, prefix: P) -> Completions<'_, S>
    where
        P: IntoIterator,
        P::Item: Borrow<S>,
        S: Clone,
    {
        let mut path = Vec::new();
        let mut node = &self.root;

        for symbol in prefix {
            let symbol: &S = symbol.borrow();

            match node.child(symbol) {
                Some(child) => {
                    path.push(symbol.clone());
                    node = child;
                }
                None => return Completions::empty(),
            }
        }

        Completions::new(node, path)
    }

    /// Every word in the trie with its count, in lexicographic symbol order.
    #[must_use]
    pub fn words(&self) -> Completions<'_, S>
    where
        S: Clone,
    {
        Completions::new(&self.root, Vec::new())
    }

    /// The node reached by following `prefix` from the root, if every edge exists.
    #[must_use]
    pub fn node<P>(&self, prefix: P) -> Option<&TrieNode<S>>
    where
        P: IntoIterator,
        P::Item: Borrow<S>,
    {
        prefix
            .into_iter()
            .try_fold(&self.root, |node, symbol| node.child(symbol.borrow()))
    }

    /// How many times exactly `word` was inserted.
    #[must_use]
    pub fn count<W>(&self, word: W) -> usize
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        self.node(word).map_or(0, TrieNode::count)
    }

    /// Returns whether exactly `word` was inserted at least once.
    #[must_use]
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: IntoIterator,
        W::Item: Borrow<S>,
    {
        self.node(word).map_or(false, TrieNode::is_end)
    }

    /// The root node, representing the empty prefix.
    #[must_use]
    pub const fn root(&self) -> &TrieNode<S> {
        &self.root
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    /// Returns whether no word was ever inserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl Trie<char> {
    /// Inserts the characters of `word`, see [`insert`](Trie::insert).
    pub fn insert_str(&mut self, word: &str) {
        self.insert(word.chars());
    }

    /// [`query`](Trie::query) with a `&str` prefix, returning the words as [`String`]s.
    #[must_use]
    pub fn query_str(&self, prefix: &str) -> Vec<(String, usize)> {
        self.query(prefix.chars())
            .into_iter()
            .map(|(word, count)| (word.into_iter().collect(), count))
            .collect()
    }

    /// How many times exactly `word` was inserted.
    #[must_use]
    pub fn count_str(&self, word: &str) -> usize {
        self.count(word.chars())
    }
}

impl<S: Ord + Clone, W: IntoIterator<Item = S>> Extend<W> for Trie<S> {
    /// Inserts every word of the iterator, repeated words are counted again.
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = W>,
    {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: Ord + Clone, W: IntoIterator<Item = S>> FromIterator<W> for Trie<S> {
    fn from_iter<T: IntoIterator<Item = W>>(iter: T) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);

        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::{borrow::ToOwned, vec};

    fn owned(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
        pairs.iter().map(|&(w, c)| (w.to_owned(), c)).collect()
    }

    #[test]
    fn exact_match() {
        let mut trie = Trie::new();
        trie.insert_str("cat");

        assert_eq!(trie.query_str("cat"), owned(&[("cat", 1)]));
    }

    #[test]
    fn prefix_match_ties_are_lexicographic() {
        let trie = ["car", "cat", "card"]
            .into_iter()
            .map(str::chars)
            .collect::<Trie<char>>();

        assert_eq!(
            trie.query_str("ca"),
            owned(&[("car", 1), ("card", 1), ("cat", 1)])
        );
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn ranked_by_count() {
        let mut trie = Trie::new();

        for w in ["cat", "car", "cab", "car", "cat", "car", "cab"] {
            trie.insert_str(w);
        }

        assert_eq!(
            trie.query_str("ca"),
            owned(&[("car", 3), ("cab", 2), ("cat", 2)])
        );
    }

    #[test]
    fn repeated_insertion() {
        let mut trie = Trie::new();

        trie.insert_str("dog");
        let nodes_once = trie.clone();
        trie.insert_str("dog");
        trie.insert_str("dog");

        assert_eq!(trie.query_str("dog"), owned(&[("dog", 3)]));
        assert_eq!(trie.count_str("dog"), 3);
        assert_eq!(trie.len(), 1);

        // no new nodes, only the counter moved
        let path = trie.node("dog".chars()).unwrap();
        assert!(path.is_leaf());
        assert_eq!(
            nodes_once.node("dog".chars()).map(TrieNode::count),
            Some(1)
        );
    }

    #[test]
    fn unknown_prefix() {
        let mut trie = Trie::new();
        trie.insert_str("cat");

        assert!(trie.query_str("dog").is_empty());
        assert!(trie.query_str("cats").is_empty());
        assert!(trie.query_str("x").is_empty());
        assert!(Trie::<char>::new().query_str("").is_empty());
    }

    #[test]
    fn words_are_rebuilt_in_full() {
        let mut trie = Trie::new();

        for w in ["was", "wash", "wish", "w"] {
            trie.insert_str(w);
        }

        assert_eq!(trie.query_str("wis"), owned(&[("wish", 1)]));
        assert_eq!(trie.query_str("wish"), owned(&[("wish", 1)]));
        assert_eq!(trie.query_str("was"), owned(&[("was", 1), ("wash", 1)]));
        assert_eq!(
            trie.query_str("w"),
            owned(&[("w", 1), ("was", 1), ("wash", 1), ("wish", 1)])
        );
    }

    #[test]
    fn prefix_without_end_node() {
        let mut trie = Trie::new();
        trie.insert_str("house");

        assert_eq!(trie.count_str("hou"), 0);
        assert!(!trie.contains("hou".chars()));
        assert!(trie.contains("house".chars()));
        assert_eq!(trie.query_str("hou"), owned(&[("house", 1)]));
    }

    #[test]
    fn empty_word_marks_root() {
        let mut trie = Trie::new();

        trie.insert_str("");
        trie.insert_str("");
        trie.insert_str("a");

        assert!(trie.root().is_end());
        assert_eq!(trie.root().count(), 2);
        assert_eq!(trie.root().symbol(), None);
        assert_eq!(trie.query_str(""), owned(&[("", 2), ("a", 1)]));
        assert_eq!(trie.query_str("a"), owned(&[("a", 1)]));
    }

    #[test]
    fn case_sensitive() {
        let mut trie = Trie::new();
        trie.insert_str("Rust");

        assert!(trie.query_str("ru").is_empty());
        assert_eq!(trie.query_str("Ru"), owned(&[("Rust", 1)]));
    }

    #[test]
    fn byte_symbols() {
        let mut trie = Trie::<u8>::new();

        trie.insert(b"abc".iter().copied());
        trie.insert(b"abd".iter().copied());
        trie.insert(b"abd".iter().copied());

        assert_eq!(
            trie.query(b"ab"),
            vec![(b"abd".to_vec(), 2), (b"abc".to_vec(), 1)]
        );
        assert_eq!(trie.node(b"a").and_then(TrieNode::symbol), Some(&b'a'));
    }

    #[test]
    fn long_words_stay_off_the_call_stack() {
        let word = || core::iter::repeat('a').take(200_000);

        let mut trie = Trie::new();
        trie.insert(word());
        trie.insert_str("ab");

        assert_eq!(trie.query_str("aaa").len(), 1);

        let copy = trie.clone();
        assert_eq!(copy, trie);
        assert_eq!(copy.count(word()), 1);

        let mut other = Trie::new();
        other.insert(word().skip(1));
        other.insert_str("ab");
        assert_ne!(other, trie);

        drop(copy);
        drop(other);
        drop(trie);
    }

    #[test]
    fn clone_is_deep() {
        let mut trie = ["tea", "ten", "to"]
            .into_iter()
            .map(str::chars)
            .collect::<Trie<char>>();

        let copy = trie.clone();
        trie.insert_str("ten");

        assert_eq!(copy.count_str("ten"), 1);
        assert_eq!(trie.count_str("ten"), 2);
        assert_ne!(copy, trie);
        assert_eq!(
            copy.query_str("t"),
            owned(&[("tea", 1), ("ten", 1), ("to", 1)])
        );
    }

    #[test]
    fn debug_lists_words() {
        extern crate std;

        let mut trie = Trie::new();
        trie.insert_str("ab");
        trie.insert_str("ab");

        assert_eq!(
            std::format!("{trie:?}"),
            "Trie{['a', 'b']: 2}"
        );
    }

    #[test]
    fn lazy_completions() {
        let trie = ["bee", "be", "bet", "bet", "a"]
            .into_iter()
            .map(str::chars)
            .collect::<Trie<char>>();

        let mut words = trie.completions("be".chars());
        assert_eq!(words.next(), Some((vec!['b', 'e'], 1)));
        assert_eq!(words.next(), Some((vec!['b', 'e', 'e'], 1)));
        assert_eq!(words.next(), Some((vec!['b', 'e', 't'], 2)));
        assert_eq!(words.next(), None);
        assert_eq!(words.next(), None);

        assert_eq!(trie.words().count(), 4);
        assert_eq!(trie.completions("z".chars()).next(), None);
    }
}
