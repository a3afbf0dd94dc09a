#![cfg_attr(not(test), no_std)]

//! `BucketVec`: a growable vector stored as an unrolled linked list.
//!
//! Elements live in an ordered list of fixed-capacity buckets instead of one
//! contiguous array. The logical sequence is the concatenation of the
//! buckets' live elements in list order. Growing never copies the whole
//! element set: a full bucket is split in two and only its own elements move.
//!
//! ```
//! # use bucketvec::BucketVec;
//! let mut vec: BucketVec<i32> = BucketVec::new();
//! vec.add(1);
//! vec.add(3);
//! vec.insert(1, 2).unwrap();
//!
//! assert_eq!(vec, [1, 2, 3]);
//! assert_eq!(vec.len(), 3);
//! assert_eq!(vec[1], 2);
//! ```
//!
//! # Bucket Capacity
//!
//! The number of slots per bucket is the const parameter `N`, defaulting to
//! [`DEFAULT_BUCKET_CAPACITY`] (10). It must be at least 2.
//!
//! ```
//! # use bucketvec::BucketVec;
//! let vec: BucketVec<u8, 4> = (0..9).collect();
//! assert_eq!(vec.bucket_capacity(), 4);
//! assert_eq!(vec.bucket_lens().collect::<Vec<_>>(), vec![2, 2, 2, 3]);
//! ```
//!
//! # Splitting
//!
//! Both `add()` and `insert()` split a full bucket at `mid = N / 2`. The
//! lower `mid` elements stay, the upper `N - mid` move into a new bucket
//! placed right after it, and the new value goes into whichever half its
//! position falls in. Each split adds `N` to `capacity()`.
//!
//! ```
//! # use bucketvec::BucketVec;
//! let mut vec: BucketVec<i32> = (0..10).collect();
//! assert_eq!(vec.capacity(), 10);
//!
//! vec.add(10);
//! assert_eq!(vec.len(), 11);
//! assert_eq!(vec.capacity(), 20);
//! assert_eq!(vec.bucket_lens().collect::<Vec<_>>(), vec![5, 6]);
//! ```
//!
//! An insertion index that lands exactly between two buckets goes to the
//! earlier bucket.
//!
//! # Removal
//!
//! `remove()` shifts elements within the owning bucket only. Buckets are
//! never merged and `capacity()` never shrinks, so heavy removal can leave
//! sparse or empty buckets behind. `clear()` is the only way back to a
//! single bucket.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `add()`: O(1) amortized; a split moves at most `N - N / 2` elements
//! - `insert()`, `remove()`: O(B + N) where B is the number of buckets
//! - `get()`, indexing: O(B) - the bucket list is walked to resolve an index
//! - `clear()`: O(len) - drops every element
//! - Cursor steps: O(1), except when skipping empty buckets
//!
//! ## Space Complexity
//! - Every bucket reserves `N` slots up front
//! - `capacity()` is always the bucket count times `N`
//!
//! # Cursors
//!
//! [`BucketVec::begin`] and [`BucketVec::end`] return [`Cursor`]s that step
//! forward and backward across bucket boundaries. A cursor borrows the
//! vector, so it cannot outlive a structural change.
//!
//! ```
//! # use bucketvec::BucketVec;
//! let vec: BucketVec<i32, 2> = BucketVec::from([10, 20, 30]);
//!
//! let mut cursor = vec.end();
//! let mut backwards = Vec::new();
//! while cursor != vec.begin() {
//!     cursor.move_prev();
//!     backwards.push(*cursor.get().unwrap());
//! }
//! assert_eq!(backwards, vec![30, 20, 10]);
//! ```
//!
//! [`BucketVec::begin_mut`] gives a [`CursorMut`] that can rewrite the
//! element under it:
//!
//! ```
//! # use bucketvec::BucketVec;
//! let mut vec: BucketVec<i32> = BucketVec::from([1, 2, 3]);
//! let mut cursor = vec.begin_mut();
//! while let Some(value) = cursor.get_mut() {
//!     *value *= 10;
//!     cursor.move_next();
//! }
//! assert_eq!(vec, [10, 20, 30]);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use bucketvec::BucketVec;
//! let mut vec: BucketVec<&str> = BucketVec::from(["hello", "world"]);
//!
//! for item in &vec {
//!     println!("{item}");
//! }
//! let reversed: Vec<_> = vec.iter_rev().copied().collect();
//! assert_eq!(reversed, vec!["world", "hello"]);
//!
//! vec.map_in_place(|item| *item = "bye");
//! assert_eq!(vec, ["bye", "bye"]);
//! ```
//!
//! ## `no_std` Compatibility
//!
//! The crate only needs `core` and `alloc`. Enable the optional `std` feature
//! to build `thiserror` and `tracing` with their `std` support:
//! ```toml
//! [dependencies]
//! bucketvec = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod bucket;
mod bucket_vec;
mod cursor;
mod error;
mod iter;

// Re-export public types and traits
pub use bucket_vec::{BucketVec, DEFAULT_BUCKET_CAPACITY};
pub use cursor::{Cursor, CursorMut};
pub use error::BucketVecError;
pub use iter::{IntoIter, Iter, IterMut};
