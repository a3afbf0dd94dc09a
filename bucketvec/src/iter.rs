use alloc::vec::Vec;
use core::iter::{FlatMap, Flatten};

use crate::bucket::Bucket;
use crate::bucket_vec::BucketVec;
use crate::cursor::Cursor;

/// Iterator over the elements of a `BucketVec`
///
/// Driven by a front and a back cursor, so it runs in both directions and
/// crosses bucket boundaries the same way a cursor does.
///
/// This iterator implements `Clone`.
pub struct Iter<'a, T, const N: usize> {
    front: Cursor<'a, T, N>,
    back: Cursor<'a, T, N>,
    remaining: usize,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(crate) fn new(vec: &'a BucketVec<T, N>) -> Self {
        Self {
            front: vec.begin(),
            back: vec.end(),
            remaining: vec.len(),
        }
    }
}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.front.get()?;
        self.front.move_next();
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for Iter<'_, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back.move_prev();
        let item = self.back.get()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> core::iter::FusedIterator for Iter<'_, T, N> {}

type BucketSlotsMut<'a, T, const N: usize> =
    fn(&'a mut Bucket<T, N>) -> core::slice::IterMut<'a, T>;

/// Mutable iterator over the elements of a `BucketVec`
pub struct IterMut<'a, T, const N: usize> {
    inner: FlatMap<
        core::slice::IterMut<'a, Bucket<T, N>>,
        core::slice::IterMut<'a, T>,
        BucketSlotsMut<'a, T, N>,
    >,
    remaining: usize,
}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    pub(crate) fn new(buckets: &'a mut [Bucket<T, N>], len: usize) -> Self {
        let slots: BucketSlotsMut<'a, T, N> = Bucket::iter_mut;
        Self {
            inner: buckets.iter_mut().flat_map(slots),
            remaining: len,
        }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IterMut<'_, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {}

/// Owning iterator over the elements of a `BucketVec`
pub struct IntoIter<T, const N: usize> {
    inner: Flatten<alloc::vec::IntoIter<Bucket<T, N>>>,
    remaining: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(crate) fn new(buckets: Vec<Bucket<T, N>>, len: usize) -> Self {
        Self {
            inner: buckets.into_iter().flatten(),
            remaining: len,
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
