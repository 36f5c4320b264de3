//! Foundation types for dmap.
//!
//! dmap is a registry of `(meta, data)` records held in a key-value store of
//! 32-byte words. This crate holds the fixed-width values every other dmap
//! crate passes around, and the hex/padding codecs used to build them.
//!
//! # Key Types
//!
//! - [`Word`]: 32-byte storage word
//! - [`Slot`]: 32-byte storage key, with a numeric successor
//! - [`Address`] / [`Zone`]: 20-byte account address
//! - [`Record`]: `(meta, data)` pair with the Lock flag in `meta`
//! - [`codec`]: hexlify, zero-padding and name encoding

#[macro_use]
mod macros;

pub mod address;
pub mod codec;
pub mod error;
pub mod record;
pub mod word;

pub use address::{Address, Zone};
pub use codec::{encode_name, zero_pad, Hexlify, NAME_LEN};
pub use error::{CodecError, CodecResult};
pub use record::{Record, FLAG_LOCK};
pub use word::{Slot, Word};
