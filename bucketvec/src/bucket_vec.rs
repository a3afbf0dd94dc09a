use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::bucket::Bucket;
use crate::cursor::{Cursor, CursorMut, Position};
use crate::error::BucketVecError;
use crate::iter::{IntoIter, Iter, IterMut};

/// Number of slots in every bucket unless the type says otherwise.
pub const DEFAULT_BUCKET_CAPACITY: usize = 10;

/// A growable vector stored as an ordered list of fixed-capacity buckets
///
/// The logical sequence is the concatenation of the buckets' live elements in
/// list order. The bucket list is never empty: a fresh or cleared vector
/// holds exactly one empty bucket.
pub struct BucketVec<T, const N: usize = DEFAULT_BUCKET_CAPACITY> {
    buckets: Vec<Bucket<T, N>>,
    len: usize,
    capacity: usize,
}

impl<T> BucketVec<T> {
    /// Creates an empty vector with the default bucket capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, const N: usize> Default for BucketVec<T, N> {
    fn default() -> Self {
        let mut buckets = Vec::new();
        buckets.push(Bucket::new());
        Self {
            buckets,
            len: 0,
            capacity: N,
        }
    }
}

impl<T: Default, const N: usize> BucketVec<T, N> {
    /// Creates a vector holding `len` default-valued elements.
    ///
    /// The elements fill `ceil(len / N)` buckets front to back, with the
    /// remainder in the last bucket. An empty vector still gets one bucket.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        let bucket_count = len.div_ceil(N);
        let mut buckets = Vec::with_capacity(bucket_count);
        let mut remaining = len;
        while remaining > 0 {
            let fill = remaining.min(N);
            let mut bucket = Bucket::new();
            bucket.fill_with(fill, T::default);
            buckets.push(bucket);
            remaining -= fill;
        }
        Self {
            buckets,
            len,
            capacity: bucket_count * N,
        }
    }
}

impl<T, const N: usize> BucketVec<T, N> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nominal allocated capacity: one full bucket's worth of slots for every
    /// bucket in the list. Grows by `N` on each split and never shrinks
    /// except on [`BucketVec::clear`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn bucket_capacity(&self) -> usize {
        N
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Live element count of every bucket, in list order.
    pub fn bucket_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Bucket::len)
    }

    pub(crate) fn buckets(&self) -> &[Bucket<T, N>] {
        &self.buckets
    }

    pub(crate) fn buckets_mut(&mut self) -> &mut [Bucket<T, N>] {
        &mut self.buckets
    }

    fn out_of_range(&self, index: usize) -> BucketVecError {
        BucketVecError::OutOfRange {
            index,
            length: self.len,
        }
    }

    /// Resolves an existing element's index to `(bucket, offset)`.
    fn locate(&self, index: usize) -> Result<(usize, usize), BucketVecError> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        let mut running = 0;
        for (position, bucket) in self.buckets.iter().enumerate() {
            if index < running + bucket.len() {
                return Ok((position, index - running));
            }
            running += bucket.len();
        }
        Err(self.out_of_range(index))
    }

    /// Resolves an insertion point to `(bucket, offset)`.
    ///
    /// An index on the boundary between two buckets goes to the earlier one,
    /// appended after its last element.
    fn locate_insert(&self, index: usize) -> Result<(usize, usize), BucketVecError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        let mut running = 0;
        for (position, bucket) in self.buckets.iter().enumerate() {
            if index <= running + bucket.len() {
                return Ok((position, index - running));
            }
            running += bucket.len();
        }
        Err(self.out_of_range(index))
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns the element at `index` for writing, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).ok()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BucketVecError::OutOfRange` if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T, BucketVecError> {
        let (bucket, offset) = self.locate(index)?;
        self.buckets[bucket]
            .get(offset)
            .map_err(|_| self.out_of_range(index))
    }

    /// Returns the element at `index` for writing.
    ///
    /// # Errors
    ///
    /// Returns `BucketVecError::OutOfRange` if `index >= len()`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, BucketVecError> {
        let (bucket, offset) = self.locate(index)?;
        let length = self.len;
        self.buckets[bucket]
            .get_mut(offset)
            .map_err(|_| BucketVecError::OutOfRange { index, length })
    }

    /// Appends `value` after the last element.
    ///
    /// When the last bucket is full it is split at `N / 2`: the upper part
    /// moves into a new bucket, which receives `value` after it and is
    /// appended to the list.
    ///
    /// # Panics
    ///
    /// May panic if the bucket list invariant is broken (internal validation
    /// failure).
    #[allow(clippy::expect_used)]
    pub fn add(&mut self, value: T) {
        let last = self.buckets.len() - 1;
        let bucket = &mut self.buckets[last];
        if bucket.is_full() {
            let mid = N / 2;
            let mut upper = bucket.split_off(mid);
            let position = upper.len();
            upper
                .set(position, value)
                .expect("Upper half of a split has a free slot");
            tracing::trace!(
                bucket = last,
                split_at = mid,
                lower = mid,
                upper = upper.len(),
                "split full bucket on add"
            );
            self.buckets.push(upper);
            self.capacity += N;
        } else {
            let position = bucket.len();
            bucket
                .set(position, value)
                .expect("Bucket checked not full");
        }
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at `index`, shifting later
    /// elements back by one. `index == len()` appends.
    ///
    /// A full target bucket is split at `N / 2` and the value goes into the
    /// half its offset falls in.
    ///
    /// # Errors
    ///
    /// Returns `BucketVecError::OutOfRange` if `index > len()`. The vector is
    /// left unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), BucketVecError> {
        let (position, offset) = self.locate_insert(index)?;
        let bucket = &mut self.buckets[position];
        if bucket.is_full() {
            let mid = N / 2;
            let mut upper = bucket.split_off(mid);
            if offset < mid {
                bucket.insert(offset, value);
            } else {
                upper.insert(offset - mid, value);
            }
            tracing::trace!(
                bucket = position,
                split_at = mid,
                lower = bucket.len(),
                upper = upper.len(),
                "split full bucket on insert"
            );
            self.buckets.insert(position + 1, upper);
            self.capacity += N;
        } else {
            bucket.insert(offset, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// forward by one.
    ///
    /// Buckets are never merged or released here, so a long run of removals
    /// can leave the list with many sparse or empty buckets and `capacity()`
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `BucketVecError::OutOfRange` if `index >= len()`. The vector
    /// is left unchanged.
    pub fn remove(&mut self, index: usize) -> Result<T, BucketVecError> {
        let (bucket, offset) = self.locate(index)?;
        let value = self.buckets[bucket].remove(offset);
        self.len -= 1;
        Ok(value)
    }

    /// Drops every element and bucket, leaving a single empty bucket.
    pub fn clear(&mut self) {
        tracing::debug!(
            len = self.len,
            buckets = self.buckets.len(),
            "clearing bucket vector"
        );
        self.buckets.clear();
        self.buckets.push(Bucket::new());
        self.len = 0;
        self.capacity = N;
    }

    /// Applies `f` to every element in order.
    pub fn map_in_place<F: FnMut(&mut T)>(&mut self, f: F) {
        self.iter_mut().for_each(f);
    }

    /// Cursor at the first element (equal to [`BucketVec::end`] when empty).
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, Position::begin(&self.buckets))
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, Position::end(&self.buckets))
    }

    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, N> {
        let position = Position::begin(&self.buckets);
        CursorMut::new(self, position)
    }

    #[must_use]
    pub fn end_mut(&mut self) -> CursorMut<'_, T, N> {
        let position = Position::end(&self.buckets);
        CursorMut::new(self, position)
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(self)
    }

    /// Returns an iterator over the elements from last to first.
    #[must_use]
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, T, N>> {
        self.iter().rev()
    }

    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        let len = self.len;
        IterMut::new(&mut self.buckets, len)
    }
}

impl<T, const N: usize> Index<usize> for BucketVec<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "Index {} out of bounds for vector of length {}",
                index, self.len
            ),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for BucketVec<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("Index {index} out of bounds for vector of length {length}"),
        }
    }
}

impl<T: Clone, const N: usize> Clone for BucketVec<T, N> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            len: self.len,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BucketVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Equality looks at the logical sequence only, never at the bucket layout.
impl<T, U, const N: usize, const M: usize> PartialEq<BucketVec<U, M>> for BucketVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &BucketVec<U, M>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for BucketVec<T, N> {}

impl<T, U, const N: usize> PartialEq<[U]> for BucketVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for BucketVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.len == M && self.iter().eq(other.iter())
    }
}

impl<T, const N: usize> Extend<T> for BucketVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, const N: usize> FromIterator<T> for BucketVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::default();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize, const M: usize> From<[T; M]> for BucketVec<T, N> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<Vec<T>> for BucketVec<T, N> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BucketVec<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut BucketVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for BucketVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets, self.len)
    }
}
