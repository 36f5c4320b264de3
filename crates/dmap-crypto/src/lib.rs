//! Cryptographic primitives for dmap.
//!
//! Provides Keccak-256 hashing, derivation of storage slots from
//! `(zone, name)` pairs, and calldata encoding for registry writes.
//!
//! All hashing wraps the `sha3` crate; there is no custom cryptography.

pub mod calldata;
pub mod hasher;
pub mod slot;

pub use calldata::{encode_call, encode_set_call, selector, SET_SIGNATURE};
pub use hasher::{keccak256, Keccak256Hasher};
pub use slot::{encode_zone_and_name, slot_of, slot_of_name};
