//! High-level SDK for dmap.
//!
//! Provides a single [`Dmap`] handle over a deployed registry: resolve dpaths,
//! read raw records and words, and submit `set` calls. This is the main entry
//! point for applications embedding dmap.

pub mod config;
pub mod deployment;
pub mod dmap;
pub mod error;

pub use config::DmapConfig;
pub use deployment::Deployment;
pub use dmap::Dmap;
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use dmap_path::{parse, Path, Step};
pub use dmap_registry::{RegistryError, Resolution, WalkContext};
pub use dmap_store::{
    InMemoryStorage, RecordingSigner, StorageProvider, StoreError, TransactionSigner, TxHandle,
};
pub use dmap_types::{Address, Record, Slot, Word, Zone, FLAG_LOCK};
