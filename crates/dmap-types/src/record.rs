use serde::{Deserialize, Serialize};

use crate::address::Zone;
use crate::word::Word;

/// Bit 0 of the meta word's low-order byte: the entry is locked.
pub const FLAG_LOCK: u8 = 1;

/// The `(meta, data)` pair stored at a slot and its successor.
///
/// `meta` carries flags in its low-order byte. The leading 20 bytes of `data`
/// name the zone a walk descends into next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub meta: Word,
    pub data: Word,
}

impl Record {
    pub fn new(meta: Word, data: Word) -> Self {
        Self { meta, data }
    }

    /// The flag byte of the meta word.
    pub fn flags(&self) -> u8 {
        self.meta.low_byte()
    }

    /// Whether the Lock flag is set.
    pub fn is_locked(&self) -> bool {
        self.flags() & FLAG_LOCK != 0
    }

    /// The zone referenced by the data word.
    pub fn zone(&self) -> Zone {
        Zone::from_word_prefix(&self.data)
    }
}
