use dmap_path::{GrammarError, Step};
use dmap_store::StoreError;
use dmap_types::CodecError;
use thiserror::Error;

/// Errors from resolving or writing registry entries.
///
/// Every variant aborts the operation that produced it; nothing is retried
/// and no partial result is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The dpath did not match the grammar.
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// The zone to resolve a step in is the all-zero terminal zone.
    #[error("zero register before step {index} ({step})")]
    ZeroRegister { index: usize, step: Step },

    /// A `:` step was taken while the walk was not locked.
    #[error("encountered ':' in unlocked subpath at step {index} ({step})")]
    UnlockedSubpath { index: usize, step: Step },

    /// A `:` step resolved to an entry without the Lock flag.
    #[error("entry is not locked at step {index} ({step})")]
    NotLocked { index: usize, step: Step },

    /// A name does not fit its 32-byte field.
    #[error("name {name:?} is {len} bytes, the limit is 32")]
    NameOverflow { name: String, len: usize },

    /// A slot or value could not be encoded.
    #[error("encoding error: {0}")]
    Codec(#[from] CodecError),

    /// The storage provider or signer failed; passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
