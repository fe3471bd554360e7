//! Error types for matrix operations.

use thiserror::Error;

/// Error type for matrix operations.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// A batched mapping window falls outside its backing slice.
    ///
    /// The window covers `[offset, offset + 2 * count)` interleaved
    /// (x, y) values.
    #[error("window [{offset}, {offset} + 2*{count}) exceeds buffer of {len} values")]
    InvalidRange {
        /// First value index of the window
        offset: usize,
        /// Number of (x, y) pairs in the window
        count: usize,
        /// Length of the backing slice
        len: usize,
    },
}

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;
