use crate::codec::left_pad;
use crate::error::{CodecError, CodecResult};

/// A 32-byte storage word, the unit the backing store reads and writes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Word([u8; 32]);

impl_fixed_bytes!(Word, 32);

impl Word {
    /// The all-zero word. Unset storage reads as this value.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// A word holding `value` as a big-endian unsigned integer.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Left-pad `bytes` into a word (numeric interpretation).
    pub fn left_padded(bytes: &[u8]) -> CodecResult<Self> {
        left_pad::<32>(bytes).map(Self)
    }

    /// The low-order (last) byte.
    pub fn low_byte(&self) -> u8 {
        self.0[31]
    }
}

/// A 32-byte key into the backing store.
///
/// Slots are 256-bit big-endian integers: a record's data word lives at the
/// [`successor`](Slot::successor) of its meta slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Slot([u8; 32]);

impl_fixed_bytes!(Slot, 32);

impl Slot {
    /// The well-known slot of the root record.
    pub const ROOT: Self = Self([0u8; 32]);

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The numerically next slot.
    ///
    /// Fails with [`CodecError::Overflow`] for the largest slot, whose
    /// successor no longer fits in 32 bytes.
    pub fn successor(&self) -> CodecResult<Self> {
        let mut next = self.0;
        for byte in next.iter_mut().rev() {
            let (value, carry) = byte.overflowing_add(1);
            *byte = value;
            if !carry {
                return Ok(Self(next));
            }
        }
        Err(CodecError::Overflow {
            capacity: 32,
            actual: 33,
        })
    }
}

impl From<Word> for Slot {
    fn from(word: Word) -> Self {
        Self(*word.as_bytes())
    }
}

impl From<Slot> for Word {
    fn from(slot: Slot) -> Self {
        Self(*slot.as_bytes())
    }
}
