//! Bidirectional positional handles into a `BucketVec`.
//!
//! A cursor is a `(bucket, offset)` pair. It steps across bucket boundaries
//! transparently, skipping buckets that removals have left empty. The end
//! position is the last bucket paired with that bucket's length.
//!
//! Cursors borrow the container: a [`Cursor`] shares it, a [`CursorMut`]
//! borrows it exclusively. Any structural change (add, insert, remove,
//! clear) invalidates every cursor obtained before it, and the borrow checker
//! rejects code that would keep using one.

use core::fmt;

use crate::bucket::Bucket;
use crate::bucket_vec::BucketVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    bucket: usize,
    offset: usize,
}

impl Position {
    pub(crate) fn begin<T, const N: usize>(buckets: &[Bucket<T, N>]) -> Self {
        let mut position = Self {
            bucket: 0,
            offset: 0,
        };
        position.skip_exhausted(buckets);
        position
    }

    pub(crate) fn end<T, const N: usize>(buckets: &[Bucket<T, N>]) -> Self {
        let bucket = buckets.len().saturating_sub(1);
        Self {
            bucket,
            offset: buckets.get(bucket).map_or(0, Bucket::len),
        }
    }

    fn is_end<T, const N: usize>(self, buckets: &[Bucket<T, N>]) -> bool {
        self == Self::end(buckets)
    }

    fn is_begin<T, const N: usize>(self, buckets: &[Bucket<T, N>]) -> bool {
        self == Self::begin(buckets)
    }

    // Leaves an offset that runs past a non-last bucket for the head of the
    // next bucket, repeatedly, so empty buckets are never landed on.
    fn skip_exhausted<T, const N: usize>(&mut self, buckets: &[Bucket<T, N>]) {
        while self.bucket + 1 < buckets.len() && self.offset >= buckets[self.bucket].len() {
            self.bucket += 1;
            self.offset = 0;
        }
    }

    fn step_forward<T, const N: usize>(&mut self, buckets: &[Bucket<T, N>]) {
        if self.is_end(buckets) {
            return;
        }
        self.offset += 1;
        self.skip_exhausted(buckets);
    }

    fn step_back<T, const N: usize>(&mut self, buckets: &[Bucket<T, N>]) {
        if self.offset > 0 {
            self.offset -= 1;
            return;
        }
        let mut bucket = self.bucket;
        while bucket > 0 {
            bucket -= 1;
            let len = buckets[bucket].len();
            if len > 0 {
                self.bucket = bucket;
                self.offset = len - 1;
                return;
            }
        }
    }

    fn element<'a, T, const N: usize>(self, buckets: &'a [Bucket<T, N>]) -> Option<&'a T> {
        buckets.get(self.bucket)?.get(self.offset).ok()
    }

    fn element_mut<'a, T, const N: usize>(
        self,
        buckets: &'a mut [Bucket<T, N>],
    ) -> Option<&'a mut T> {
        buckets.get_mut(self.bucket)?.get_mut(self.offset).ok()
    }

    fn logical_index<T, const N: usize>(self, buckets: &[Bucket<T, N>]) -> usize {
        buckets[..self.bucket].iter().map(Bucket::len).sum::<usize>() + self.offset
    }
}

/// A read-only cursor over a `BucketVec`.
///
/// Two cursors are equal when they come from the same container and sit on
/// the same bucket and offset.
pub struct Cursor<'a, T, const N: usize> {
    vec: &'a BucketVec<T, N>,
    position: Position,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    pub(crate) fn new(vec: &'a BucketVec<T, N>, position: Position) -> Self {
        Self { vec, position }
    }

    /// Returns the element under the cursor, or `None` at the end position.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.position.element(self.vec.buckets())
    }

    /// Advances to the next element. Does nothing at the end position.
    pub fn move_next(&mut self) {
        self.position.step_forward(self.vec.buckets());
    }

    /// Steps back to the previous element. Does nothing at the first element.
    pub fn move_prev(&mut self) {
        self.position.step_back(self.vec.buckets());
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.is_end(self.vec.buckets())
    }

    #[must_use]
    pub fn is_begin(&self) -> bool {
        self.position.is_begin(self.vec.buckets())
    }

    /// Logical index of the cursor; equals `len()` at the end position.
    ///
    /// Walks the buckets before the cursor, so this is O(number of buckets).
    #[must_use]
    pub fn index(&self) -> usize {
        self.position.logical_index(self.vec.buckets())
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.vec, other.vec) && self.position == other.position
    }
}

impl<T, const N: usize> Eq for Cursor<'_, T, N> {}

impl<T, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("bucket", &self.position.bucket)
            .field("offset", &self.position.offset)
            .finish()
    }
}

/// A cursor with write access to the element under it.
///
/// The cursor can rewrite elements in place but cannot change the structure
/// of the container.
pub struct CursorMut<'a, T, const N: usize> {
    vec: &'a mut BucketVec<T, N>,
    position: Position,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    pub(crate) fn new(vec: &'a mut BucketVec<T, N>, position: Position) -> Self {
        Self { vec, position }
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.position.element(self.vec.buckets())
    }

    /// Returns the element under the cursor for writing, or `None` at the
    /// end position.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.position.element_mut(self.vec.buckets_mut())
    }

    pub fn move_next(&mut self) {
        self.position.step_forward(self.vec.buckets());
    }

    pub fn move_prev(&mut self) {
        self.position.step_back(self.vec.buckets());
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.is_end(self.vec.buckets())
    }

    #[must_use]
    pub fn is_begin(&self) -> bool {
        self.position.is_begin(self.vec.buckets())
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.position.logical_index(self.vec.buckets())
    }

    /// Reborrows as a read-only cursor at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(&*self.vec, self.position)
    }
}

impl<T, const N: usize> fmt::Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("bucket", &self.position.bucket)
            .field("offset", &self.position.offset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::BucketVec;

    #[test]
    fn test_begin_equals_end_when_empty() {
        let vec: BucketVec<i32> = BucketVec::new();
        assert_eq!(vec.begin(), vec.end());
        assert!(vec.begin().is_end());
        assert_eq!(vec.begin().get(), None);
    }

    #[test]
    fn test_cursor_skips_emptied_buckets() {
        let mut vec: BucketVec<i32, 2> = BucketVec::from([0, 1, 2]);
        // buckets: [0] [1, 2]
        vec.remove(0).unwrap();
        // buckets: [] [1, 2]
        let mut cursor = vec.begin();
        assert_eq!(cursor.get(), Some(&1));
        cursor.move_next();
        assert_eq!(cursor.get(), Some(&2));
        cursor.move_next();
        assert!(cursor.is_end());
        cursor.move_prev();
        cursor.move_prev();
        assert_eq!(cursor.get(), Some(&1));
        assert!(cursor.is_begin());
    }

    #[test]
    fn test_move_prev_at_begin_stays() {
        let vec: BucketVec<i32> = BucketVec::from([5, 6]);
        let mut cursor = vec.begin();
        cursor.move_prev();
        assert_eq!(cursor, vec.begin());
        assert_eq!(cursor.get(), Some(&5));
    }

    #[test]
    fn test_move_next_at_end_stays() {
        let vec: BucketVec<i32> = BucketVec::from([5]);
        let mut cursor = vec.end();
        cursor.move_next();
        assert_eq!(cursor, vec.end());
    }

    #[test]
    fn test_cursors_of_different_vectors_differ() {
        let a: BucketVec<i32> = BucketVec::new();
        let b: BucketVec<i32> = BucketVec::new();
        assert_ne!(a.begin(), b.begin());
    }
}
