use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use dmap_crypto::Keccak256Hasher;
use dmap_types::{Address, Word};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::{TransactionSigner, TxHandle};

/// A transaction captured by [`RecordingSigner`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub to: Address,
    pub calldata: Bytes,
    pub handle: TxHandle,
}

/// Signer that records submissions instead of broadcasting them.
///
/// Each submission gets the next nonce and a hash of
/// `keccak256(to ‖ calldata ‖ nonce)`, so handles are deterministic.
#[derive(Default)]
pub struct RecordingSigner {
    state: Mutex<SignerState>,
    reject_with: Option<String>,
}

#[derive(Default)]
struct SignerState {
    next_nonce: u64,
    submissions: Vec<Submission>,
}

impl RecordingSigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A signer that rejects every submission with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reject_with: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Everything submitted so far, oldest first.
    pub fn submissions(&self) -> Vec<Submission> {
        self.state.lock().expect("lock poisoned").submissions.clone()
    }
}

#[async_trait]
impl TransactionSigner for RecordingSigner {
    async fn submit(&self, to: &Address, calldata: Bytes) -> StoreResult<TxHandle> {
        if let Some(reason) = &self.reject_with {
            return Err(StoreError::Rejected(reason.clone()));
        }
        let mut state = self.state.lock().expect("lock poisoned");
        let nonce = state.next_nonce;
        state.next_nonce += 1;

        let mut hasher = Keccak256Hasher::new();
        hasher
            .update(to.as_bytes())
            .update(&calldata)
            .update(&nonce.to_be_bytes());
        let handle = TxHandle {
            hash: Word::new(hasher.finalize()),
            nonce,
        };
        debug!(to = %to, nonce, hash = %handle.hash, "recorded transaction");
        state.submissions.push(Submission {
            to: *to,
            calldata,
            handle,
        });
        Ok(handle)
    }
}

impl std::fmt::Debug for RecordingSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.state.lock().expect("lock poisoned").submissions.len();
        f.debug_struct("RecordingSigner")
            .field("submission_count", &count)
            .field("rejecting", &self.reject_with.is_some())
            .finish()
    }
}
