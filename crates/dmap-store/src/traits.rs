use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use dmap_types::{Address, Slot, Word};

use crate::error::StoreResult;

/// Read access to contract storage.
///
/// Implementations must satisfy these rules:
/// - Unset slots read as [`Word::ZERO`], not as an error.
/// - Transport failures surface as [`StoreError::Network`](crate::StoreError::Network)
///   and are never retried here; callers decide what to do.
/// - Reads have no side effects and may be issued concurrently.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Read the word stored at `slot` of the contract at `address`.
    async fn fetch_word(&self, address: &Address, slot: &Slot) -> StoreResult<Word>;
}

/// Submits transactions on behalf of an account.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Sign and send a call to `to` with the given calldata.
    async fn submit(&self, to: &Address, calldata: Bytes) -> StoreResult<TxHandle>;
}

/// Handle for a submitted transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TxHandle {
    /// Transaction hash.
    pub hash: Word,
    /// Sender nonce the transaction was submitted with.
    pub nonce: u64,
}

#[async_trait]
impl<T: StorageProvider + ?Sized> StorageProvider for Arc<T> {
    async fn fetch_word(&self, address: &Address, slot: &Slot) -> StoreResult<Word> {
        (**self).fetch_word(address, slot).await
    }
}

#[async_trait]
impl<T: StorageProvider + ?Sized> StorageProvider for Box<T> {
    async fn fetch_word(&self, address: &Address, slot: &Slot) -> StoreResult<Word> {
        (**self).fetch_word(address, slot).await
    }
}

#[async_trait]
impl<T: TransactionSigner + ?Sized> TransactionSigner for Arc<T> {
    async fn submit(&self, to: &Address, calldata: Bytes) -> StoreResult<TxHandle> {
        (**self).submit(to, calldata).await
    }
}

#[async_trait]
impl<T: TransactionSigner + ?Sized> TransactionSigner for Box<T> {
    async fn submit(&self, to: &Address, calldata: Bytes) -> StoreResult<TxHandle> {
        (**self).submit(to, calldata).await
    }
}
