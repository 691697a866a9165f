//! A fixed capacity binary min-heap, this module contains the [`MinHeap`] type.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

mod error;
pub use error::{HeapEmpty, HeapFull};
mod iter;
pub use iter::{DrainSorted, Iter};

const fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

const fn left(idx: usize) -> usize {
    2 * idx + 1
}

const fn right(idx: usize) -> usize {
    2 * idx + 2
}

/// An array backed binary min-heap whose capacity is fixed when it is created.
///
/// The smallest element always sits at the root, so [`extract_min`](MinHeap::extract_min) and
/// [`insert`](MinHeap::insert) are both `O(log n)`. The backing storage is allocated once by
/// [`MinHeap::new`] and never grows, inserting into a full heap hands the value back inside a
/// [`HeapFull`] error instead.
///
/// When two children of a node compare equal, sifting down always moves the left child up.
///
/// # Examples
/// ```rust
/// use minheap_trie::{HeapEmpty, HeapFull, MinHeap};
///
/// let mut heap = MinHeap::new(3);
///
/// heap.insert(7).unwrap();
/// heap.insert(2).unwrap();
/// heap.insert(5).unwrap();
///
/// assert_eq!(heap.insert(1), Err(HeapFull(1)));
///
/// assert_eq!(heap.extract_min(), Ok(2));
/// assert_eq!(heap.extract_min(), Ok(5));
/// assert_eq!(heap.extract_min(), Ok(7));
/// assert_eq!(heap.extract_min(), Err(HeapEmpty));
/// ```
pub struct MinHeap<T: Ord> {
    storage: Vec<T>,
    capacity: usize,
}

impl<T: Ord + fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MinHeap")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

// Manually impl so the clone keeps the full preallocated capacity
impl<T: Ord + Clone> Clone for MinHeap<T> {
    fn clone(&self) -> Self {
        let mut storage = Vec::with_capacity(self.capacity);
        storage.extend_from_slice(&self.storage);

        Self {
            storage,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.storage.clear();
        self.storage.reserve_exact(other.capacity);
        self.storage.extend_from_slice(&other.storage);
        self.capacity = other.capacity;
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates a new empty [`MinHeap`] that holds at most `capacity` elements.
    ///
    /// This allocates the whole backing storage up front. A capacity of zero is allowed and
    /// produces a heap that is always full.
    ///
    /// # Panics:
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts `value`, sifting it up until its parent is not greater than it.
    ///
    /// This operation is `O(log n)`.
    ///
    /// # Errors
    /// Returns [`HeapFull`] holding `value` if the heap already contains
    /// [`capacity`](MinHeap::capacity) elements. The heap is left untouched.
    pub fn insert(&mut self, value: T) -> Result<(), HeapFull<T>> {
        self.push_live(value)?;
        self.sift_up(self.storage.len() - 1);

        Ok(())
    }

    /// Recursive twin of [`insert`](MinHeap::insert), with identical results.
    ///
    /// # Errors
    /// Returns [`HeapFull`] holding `value` if the heap is full.
    pub fn insert_recursive(&mut self, value: T) -> Result<(), HeapFull<T>> {
        self.push_live(value)?;
        self.sift_up_recursive(self.storage.len() - 1);

        Ok(())
    }

    /// Removes and returns the smallest element.
    ///
    /// The last live element takes the root slot and is sifted down towards the leaves.
    ///
    /// This operation is `O(log n)`.
    ///
    /// # Errors
    /// Returns [`HeapEmpty`] if there are no elements left.
    pub fn extract_min(&mut self) -> Result<T, HeapEmpty> {
        let min = self.take_root()?;
        self.sift_down(0);

        Ok(min)
    }

    /// Recursive twin of [`extract_min`](MinHeap::extract_min), with identical results.
    ///
    /// # Errors
    /// Returns [`HeapEmpty`] if there are no elements left.
    pub fn extract_min_recursive(&mut self) -> Result<T, HeapEmpty> {
        let min = self.take_root()?;
        self.sift_down_recursive(0);

        Ok(min)
    }

    /// Inserts every element of `iter` in order, stopping at the first one that does not fit.
    ///
    /// Elements inserted before the failure stay in the heap, the rest of the iterator is not consumed.
    ///
    /// # Errors
    /// Returns [`HeapFull`] holding the first rejected element.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), HeapFull<T>>
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().try_for_each(|value| self.insert(value))
    }

    /// Returns the smallest element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns the fixed capacity this heap was created with.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns whether the heap holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns whether another [`insert`](MinHeap::insert) would fail.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.storage.len() == self.capacity
    }

    /// The live elements in heap (array) order, the minimum first.
    ///
    /// For every index `i > 0`, `slice[(i - 1) / 2] <= slice[i]`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// An iterator over the live elements in heap (array) order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.storage.iter())
    }

    /// Removes every element, yielding them in ascending order.
    ///
    /// When this iterator is dropped it drops all remaining elements.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted(self)
    }

    /// Consumes the heap, returning its elements in ascending order.
    ///
    /// This operation is `O(n log n)`.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        sorted.extend(self.drain_sorted());

        sorted
    }

    /// Removes all elements, the capacity stays the same.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    fn push_live(&mut self, value: T) -> Result<(), HeapFull<T>> {
        if self.is_full() {
            return Err(HeapFull(value));
        }

        self.storage.push(value);
        Ok(())
    }

    fn take_root(&mut self) -> Result<T, HeapEmpty> {
        if self.storage.is_empty() {
            return Err(HeapEmpty);
        }

        // the last live element moves into slot 0
        Ok(self.storage.swap_remove(0))
    }

    /// Index of the child to compare against when sifting down, the left one wins ties.
    fn smaller_child(&self, idx: usize) -> Option<usize> {
        let (l, r) = (left(idx), right(idx));

        if l >= self.storage.len() {
            return None;
        }

        if r < self.storage.len() && self.storage[r] < self.storage[l] {
            Some(r)
        } else {
            Some(l)
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let p = parent(idx);

            if self.storage[p] <= self.storage[idx] {
                break;
            }

            self.storage.swap(p, idx);
            idx = p;
        }
    }

    fn sift_up_recursive(&mut self, idx: usize) {
        if idx == 0 {
            return;
        }

        let p = parent(idx);

        if self.storage[p] > self.storage[idx] {
            self.storage.swap(p, idx);
            self.sift_up_recursive(p);
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        while let Some(child) = self.smaller_child(idx) {
            if self.storage[idx] <= self.storage[child] {
                break;
            }

            self.storage.swap(idx, child);
            idx = child;
        }
    }

    fn sift_down_recursive(&mut self, idx: usize) {
        let Some(child) = self.smaller_child(idx) else {
            return;
        };

        if self.storage[idx] > self.storage[child] {
            self.storage.swap(idx, child);
            self.sift_down_recursive(child);
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        assert!(self.storage.len() <= self.capacity);

        for idx in 1..self.storage.len() {
            assert!(self.storage[parent(idx)] <= self.storage[idx]);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
