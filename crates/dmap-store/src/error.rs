use dmap_types::CodecError;

/// Errors from storage providers and transaction signers.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be reached or returned a transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// The signer refused or the backend rejected a transaction.
    #[error("transaction rejected: {0}")]
    Rejected(String),

    /// A key or value could not be encoded for the backend.
    #[error("encoding error: {0}")]
    Codec(#[from] CodecError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
