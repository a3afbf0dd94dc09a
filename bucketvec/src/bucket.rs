use alloc::vec::Vec;

use crate::error::BucketVecError;

/// One fixed-capacity segment of a `BucketVec`.
///
/// The slot block is allocated once with room for `N` elements and is never
/// grown. Only the first `len()` slots hold live elements. A bucket knows
/// nothing about its siblings; splitting and placement are decided by the
/// owning container.
#[derive(Debug)]
pub(crate) struct Bucket<T, const N: usize> {
    slots: Vec<T>,
}

impl<T, const N: usize> Bucket<T, N> {
    const CAPACITY_CHECK: () = assert!(N >= 2, "bucket capacity must be at least 2");

    pub(crate) fn new() -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            slots: Vec::with_capacity(N),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[allow(dead_code)]
    pub(crate) fn capacity(&self) -> usize {
        N
    }

    pub(crate) fn is_full(&self) -> bool {
        self.slots.len() == N
    }

    /// Reads the live element at `position`.
    ///
    /// # Errors
    ///
    /// Returns `BucketVecError::OutOfRange` if `position >= len()`.
    pub(crate) fn get(&self, position: usize) -> Result<&T, BucketVecError> {
        let length = self.slots.len();
        self.slots
            .get(position)
            .ok_or(BucketVecError::OutOfRange {
                index: position,
                length,
            })
    }

    /// Mutable variant of [`Bucket::get`].
    ///
    /// # Errors
    ///
    /// Returns `BucketVecError::OutOfRange` if `position >= len()`.
    pub(crate) fn get_mut(&mut self, position: usize) -> Result<&mut T, BucketVecError> {
        let length = self.slots.len();
        self.slots
            .get_mut(position)
            .ok_or(BucketVecError::OutOfRange {
                index: position,
                length,
            })
    }

    /// Writes `value` at `position`.
    ///
    /// `position == len()` extends the bucket by one slot. Positions past
    /// `len()`, and extending a full bucket, are rejected without touching
    /// the bucket.
    ///
    /// # Errors
    ///
    /// Returns `BucketVecError::OutOfRange` if `position > len()` or the
    /// bucket is full and `position == len()`.
    pub(crate) fn set(&mut self, position: usize, value: T) -> Result<(), BucketVecError> {
        let length = self.slots.len();
        if let Some(slot) = self.slots.get_mut(position) {
            *slot = value;
            return Ok(());
        }
        if position == length && length < N {
            self.slots.push(value);
            return Ok(());
        }
        Err(BucketVecError::OutOfRange {
            index: position,
            length,
        })
    }

    /// Shifts `[position, len)` one slot to the right and writes `value` at
    /// `position`.
    ///
    /// The caller guarantees the bucket is not full and `position <= len()`.
    pub(crate) fn insert(&mut self, position: usize, value: T) {
        debug_assert!(!self.is_full(), "insert into a full bucket");
        self.slots.insert(position, value);
    }

    /// Shifts `[position + 1, len)` one slot to the left and returns the
    /// element that was at `position`.
    ///
    /// The caller guarantees `position < len()`.
    pub(crate) fn remove(&mut self, position: usize) -> T {
        self.slots.remove(position)
    }

    /// Moves the slots `[at, len)` into a fresh bucket, keeping `at` elements
    /// here.
    pub(crate) fn split_off(&mut self, at: usize) -> Self {
        let mut upper = Self::new();
        upper.slots.extend(self.slots.drain(at..));
        upper
    }

    /// Appends `count` elements produced by `f`.
    ///
    /// The caller guarantees `len() + count <= N`.
    pub(crate) fn fill_with(&mut self, count: usize, f: impl FnMut() -> T) {
        debug_assert!(self.slots.len() + count <= N, "fill past bucket capacity");
        let target = self.slots.len() + count;
        self.slots.resize_with(target, f);
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }
}

impl<T: Clone, const N: usize> Clone for Bucket<T, N> {
    // A derived clone would shrink the slot block to `len()`.
    fn clone(&self) -> Self {
        let mut bucket = Self::new();
        bucket.slots.extend(self.slots.iter().cloned());
        bucket
    }
}

impl<T, const N: usize> IntoIterator for Bucket<T, N> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}
