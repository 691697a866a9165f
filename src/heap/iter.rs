use core::iter::FusedIterator;

use super::MinHeap;

/// Immutable view Iterator over a [`MinHeap`] in heap (array) order.
pub struct Iter<'a, T>(pub(super) core::slice::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.0.count()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

/// Draining Iterator from a [`MinHeap`] that yields elements in ascending order.
///
/// When this iterator is dropped it drops all remaining elements.
pub struct DrainSorted<'a, T: Ord>(pub(super) &'a mut MinHeap<T>);

impl<T: Ord> Iterator for DrainSorted<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.extract_min().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.len();
        (len, Some(len))
    }
}

impl<T: Ord> FusedIterator for DrainSorted<'_, T> {}
impl<T: Ord> ExactSizeIterator for DrainSorted<'_, T> {}

impl<T: Ord> Drop for DrainSorted<'_, T> {
    fn drop(&mut self) {
        self.0.clear();
    }
}
