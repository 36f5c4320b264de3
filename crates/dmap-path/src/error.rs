//! Error types for dpath parsing.

use thiserror::Error;

/// A dpath did not match the grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid dpath {input:?} at offset {offset}: {reason}")]
pub struct GrammarError {
    /// The full input as given.
    pub input: String,
    /// Byte offset of the first character that could not be consumed.
    pub offset: usize,
    pub reason: GrammarReason,
}

/// Why a dpath was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarReason {
    /// A step must start with `:` or `.`.
    #[error("expected ':' or '.', found {0:?}")]
    ExpectedRune(char),

    /// A rune was not followed by any name characters.
    #[error("empty name")]
    EmptyName,

    /// A name contained a character outside `[a-z0-9]`.
    #[error("unexpected character {0:?} in name")]
    UnexpectedChar(char),
}

/// Convenience type alias for parse operations.
pub type Result<T> = std::result::Result<T, GrammarError>;
