use thiserror::Error;

/// Error types for `BucketVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BucketVecError {
    /// Index is outside the valid domain for the operation.
    ///
    /// Reads, writes and removals require `index < length`; insertion
    /// additionally accepts `index == length`.
    #[error("Index out of range: index {index} is beyond vector length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Length of the vector (or bucket) at the time of the access
        length: usize,
    },
}
