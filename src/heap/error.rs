#[cfg(feature = "std")]
extern crate std;

use core::fmt;

/// Error returned when inserting into a [`MinHeap`][super::MinHeap] that is at capacity.
///
/// The rejected value is handed back rather than dropped, see [`HeapFull::into_inner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapFull<T>(pub T);

impl<T> HeapFull<T> {
    /// Returns the value that could not be inserted.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for HeapFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("heap is full")
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Debug> std::error::Error for HeapFull<T> {}

/// Error returned when extracting from an empty [`MinHeap`][super::MinHeap].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeapEmpty;

impl fmt::Display for HeapEmpty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("heap is empty")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HeapEmpty {}
