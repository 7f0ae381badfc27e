//! Error type for the checked codec operations.

use thiserror::Error;

/// Failure reported by the `try_*` codec functions.
///
/// The panicking functions hit the same condition through slice indexing.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The requested byte range does not fit inside the buffer.
    #[error("{width}-byte access at index {index} exceeds buffer of {len} bytes")]
    OutOfBounds {
        /// Offset of the first byte.
        index: usize,
        /// Number of bytes the value occupies.
        width: usize,
        /// Length of the buffer.
        len: usize,
    },
}
