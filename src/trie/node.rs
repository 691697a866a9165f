extern crate alloc;

use alloc::{
    collections::{btree_map, BTreeMap},
    vec::Vec,
};
use core::{fmt, mem};

/// A single node of a [`Trie`][super::Trie].
///
/// Each node owns its children, keyed by the symbol on the edge leading to them.
/// A node marked as an end carries the number of times the word spelled by the path from the root was inserted.
///
/// Dropping, cloning and comparing nodes walk the subtree with an explicit stack,
/// so arbitrarily long words do not grow the call stack.
pub struct TrieNode<S> {
    symbol: Option<S>,
    end: bool,
    counter: usize,
    children: BTreeMap<S, TrieNode<S>>,
}

impl<S: Ord> TrieNode<S> {
    /// the empty prefix, no symbol and not an end
    pub(super) fn root() -> Self {
        Self {
            symbol: None,
            end: false,
            counter: 0,
            children: BTreeMap::new(),
        }
    }

    fn with_symbol(symbol: S) -> Self {
        Self {
            symbol: Some(symbol),
            end: false,
            counter: 0,
            children: BTreeMap::new(),
        }
    }

    /// Follows the edge for `symbol`, creating the child if it is missing.
    pub(super) fn child_or_insert(&mut self, symbol: S) -> &mut Self
    where
        S: Clone,
    {
        match self.children.entry(symbol) {
            btree_map::Entry::Occupied(child) => child.into_mut(),
            btree_map::Entry::Vacant(slot) => {
                let symbol = slot.key().clone();
                slot.insert(Self::with_symbol(symbol))
            }
        }
    }

    /// Marks this node as the end of a word and counts one more insertion,
    /// returns true if it was not an end before.
    pub(super) fn mark_end(&mut self) -> bool {
        let first = !self.end;

        self.end = true;
        self.counter += 1;

        first
    }

    /// The symbol on the edge into this node, `None` for the root.
    #[must_use]
    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }

    /// Whether a word ends at this node.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.end
    }

    /// How many times the word ending at this node was inserted, 0 if no word ends here.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.counter
    }

    /// The child reached over the edge labelled `symbol`, if any.
    #[must_use]
    pub fn child(&self, symbol: &S) -> Option<&Self> {
        self.children.get(symbol)
    }

    /// The children of this node in symbol order.
    #[must_use]
    pub fn children(&self) -> btree_map::Values<'_, S, Self> {
        self.children.values()
    }

    /// Returns whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Copies everything but the children.
    fn clone_childless(&self) -> Self
    where
        S: Clone,
    {
        Self {
            symbol: self.symbol.clone(),
            end: self.end,
            counter: self.counter,
            children: BTreeMap::new(),
        }
    }

    fn adopt(&mut self, child: Self)
    where
        S: Clone,
    {
        // only the root has no symbol, and it is never adopted
        if let Some(symbol) = child.symbol.clone() {
            self.children.insert(symbol, child);
        }
    }
}

impl<S> Drop for TrieNode<S> {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children)
            .into_values()
            .collect::<Vec<_>>();

        // each node is emptied before it drops, so its own drop has nothing to walk
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl<S: Ord + Clone> Clone for TrieNode<S> {
    fn clone(&self) -> Self {
        // source children still to copy, paired with the copy being built
        let mut frames = Vec::new();
        let mut current = (self.children.values(), self.clone_childless());

        loop {
            if let Some(child) = current.0.next() {
                let next = (child.children.values(), child.clone_childless());
                frames.push(mem::replace(&mut current, next));
                continue;
            }

            let Some(parent) = frames.pop() else {
                return current.1;
            };

            let (_, done) = mem::replace(&mut current, parent);
            current.1.adopt(done);
        }
    }
}

impl<S: PartialEq> PartialEq for TrieNode<S> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = Vec::from([(self, other)]);

        while let Some((a, b)) = pending.pop() {
            if a.symbol != b.symbol
                || a.end != b.end
                || a.counter != b.counter
                || a.children.len() != b.children.len()
            {
                return false;
            }

            for ((sa, ca), (sb, cb)) in a.children.iter().zip(&b.children) {
                if sa != sb {
                    return false;
                }

                pending.push((ca, cb));
            }
        }

        true
    }
}

impl<S: Eq> Eq for TrieNode<S> {}

impl<S: fmt::Debug> fmt::Debug for TrieNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // children are summarized, a full dump would recurse once per symbol
        f.debug_struct("TrieNode")
            .field("symbol", &self.symbol)
            .field("end", &self.end)
            .field("counter", &self.counter)
            .field("children", &self.children.keys())
            .finish()
    }
}
