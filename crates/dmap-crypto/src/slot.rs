//! Slot derivation.
//!
//! A record named `name` inside `zone` lives at
//! `keccak256(0^12 ‖ zone ‖ name)`, where `zone` is 20 bytes and `name` is
//! right-padded to 32 bytes. The 64-byte preimage matches the EVM's
//! `abi.encode(address, bytes32)` layout. Its data word sits at the successor
//! slot; that pairing is a storage layout contract handled by
//! [`Slot::successor`], not here.

use dmap_types::codec::encode_name;
use dmap_types::{CodecResult, Slot, Zone, NAME_LEN};

use crate::hasher::keccak256;

/// Length of the slot preimage.
pub const PREIMAGE_LEN: usize = 64;

const ZONE_OFFSET: usize = 12;
const NAME_OFFSET: usize = ZONE_OFFSET + Zone::LEN;

/// Build the 64-byte slot preimage. Absent parts are encoded as zeros.
pub fn encode_zone_and_name(zone: Option<&Zone>, name: Option<&[u8; NAME_LEN]>) -> [u8; PREIMAGE_LEN] {
    let mut preimage = [0u8; PREIMAGE_LEN];
    if let Some(zone) = zone {
        preimage[ZONE_OFFSET..NAME_OFFSET].copy_from_slice(zone.as_bytes());
    }
    if let Some(name) = name {
        preimage[NAME_OFFSET..].copy_from_slice(name);
    }
    preimage
}

/// The slot of the record `name` in `zone`.
pub fn slot_of(zone: &Zone, name: &[u8; NAME_LEN]) -> Slot {
    Slot::new(keccak256(&encode_zone_and_name(Some(zone), Some(name))))
}

/// Like [`slot_of`], encoding a textual name first.
///
/// Names longer than 32 bytes are rejected, never truncated.
pub fn slot_of_name(zone: &Zone, name: &str) -> CodecResult<Slot> {
    Ok(slot_of(zone, &encode_name(name)?))
}
