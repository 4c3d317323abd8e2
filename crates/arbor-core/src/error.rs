//! Error types for arbor operations.

use thiserror::Error;

/// Result type alias for arbor operations.
pub type Result<T> = std::result::Result<T, ArborError>;

/// Errors that can occur in arbor operations.
///
/// All variants are raised synchronously at the point of the violated
/// precondition; nothing in this crate retries its own argument validation.
#[derive(Error, Debug)]
pub enum ArborError {
    /// A required input was negative, empty, or otherwise malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A selection size or index fell outside the valid range.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A required structural reference was absent.
    #[error("null input: {0}")]
    NullInput(String),

    /// I/O error while pulling from a stream-backed sequence.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
