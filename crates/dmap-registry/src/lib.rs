//! Dpath resolution and registry writes for dmap.
//!
//! The registry is a tree of zones. Each zone maps 32-byte names to
//! `(meta, data)` records at slots derived from `(zone, name)`; a record's
//! data word names the zone its children live in. This crate walks that tree
//! through a [`StorageProvider`](dmap_store::StorageProvider), enforcing the
//! Lock flag along the way, and builds `set` calls for a
//! [`TransactionSigner`](dmap_store::TransactionSigner).
//!
//! # Modules
//!
//! - [`walker`]: [`Walker`], [`WalkContext`], [`walk`] and [`walk_traced`]
//! - [`fetch`]: single-word and record reads
//! - [`write`]: [`submit_set`]
//! - [`error`]: [`RegistryError`]

pub mod error;
pub mod fetch;
pub mod walker;
pub mod write;

pub use error::{RegistryError, RegistryResult};
pub use fetch::{encode_step_name, fetch_by_zone_and_name, fetch_record, fetch_word, name_word};
pub use walker::{walk, walk_traced, Resolution, WalkContext, Walker};
pub use write::submit_set;
