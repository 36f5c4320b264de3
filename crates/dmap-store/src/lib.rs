//! Storage and transaction collaborators for dmap.
//!
//! The registry itself lives in an external contract. This crate defines the
//! two capabilities the resolver consumes from the outside world, plus
//! in-memory implementations for tests and embedding.
//!
//! # Capabilities
//!
//! - [`StorageProvider`] -- reads 32-byte words from contract storage
//! - [`TransactionSigner`] -- submits calldata to a contract
//!
//! # Backends
//!
//! - [`InMemoryStorage`] -- `HashMap`-backed storage with record helpers
//! - [`RecordingSigner`] -- captures submissions with deterministic handles
//!
//! Errors from the backend are propagated as-is. Nothing in this crate
//! caches or retries.

pub mod error;
pub mod memory;
pub mod signer;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStorage;
pub use signer::{RecordingSigner, Submission};
pub use traits::{StorageProvider, TransactionSigner, TxHandle};
