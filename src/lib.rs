#![no_std]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![warn(clippy::alloc_instead_of_core, clippy::std_instead_of_alloc)]
//! `minheap_trie` is a crate of two small, independent in-memory collections:
//!  a fixed capacity binary min-heap and a prefix tree that ranks completions by how often they were inserted.
//!
//!  Use [`MinHeap`] when you need a bounded priority queue, and [`Trie`] for prefix lookups such as autocompletion.
//!
//! ## `MinHeap`
//! The heap allocates its whole storage when it is created and never grows.
//!  Inserting into a full heap returns [`HeapFull`] with the rejected value, extracting from an empty one returns [`HeapEmpty`].
//!
//! ```rust
//! use minheap_trie::MinHeap;
//!
//! let mut heap = MinHeap::new(6);
//!
//! heap.try_extend([5, 3, 8, 1, 9, 2]).unwrap();
//!
//! assert!(heap.is_full());
//! assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 5, 8, 9]);
//! ```
//!
//! ## `Trie`
//! Every insertion of a word is counted, and [`Trie::query`] returns all words under a prefix
//!  from most to least inserted, ties broken by lexicographic symbol order.
//!
//! ```rust
//! use minheap_trie::Trie;
//!
//! let mut trie = Trie::new();
//!
//! for _ in 0..3 {
//!     trie.insert_str("dog");
//! }
//! trie.insert_str("door");
//!
//! assert_eq!(
//!     trie.query_str("do"),
//!     vec![("dog".to_owned(), 3), ("door".to_owned(), 1)]
//! );
//! ```
//!
//! Neither type does any internal locking, share them across threads behind your own mutex.

pub mod heap;
pub use heap::{HeapEmpty, HeapFull, MinHeap};

pub mod trie;
pub use trie::{Trie, TrieNode};
