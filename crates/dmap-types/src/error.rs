use thiserror::Error;

/// Errors produced by fixed-width encoding and decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The value needs more bytes than the fixed-width field provides.
    #[error("value too big: {actual} bytes do not fit in {capacity}")]
    Overflow { capacity: usize, actual: usize },
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
