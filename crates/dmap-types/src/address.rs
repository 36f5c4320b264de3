use crate::word::Word;

/// A 20-byte account address.
///
/// Used both for the registry contract itself and for zones, the
/// sub-registries a record points to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; 20]);

impl_fixed_bytes!(Address, 20);

/// Entry point of a sub-registry. The all-zero zone is the terminal sentinel.
pub type Zone = Address;

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The address held in the leading 20 bytes of a word.
    pub fn from_word_prefix(word: &Word) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word.as_bytes()[..20]);
        Self(bytes)
    }

    /// A word with this address in its leading 20 bytes.
    pub fn to_word_prefix(&self) -> Word {
        let mut bytes = [0u8; 32];
        bytes[..20].copy_from_slice(&self.0);
        Word::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_address_is_zero() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::new([1; 20]).is_zero());
    }

    #[test]
    fn word_prefix_roundtrip() {
        let zone = Address::new([0xab; 20]);
        let word = zone.to_word_prefix();
        assert_eq!(&word.as_bytes()[..20], &[0xab; 20]);
        assert!(word.as_bytes()[20..].iter().all(|b| *b == 0));
        assert_eq!(Address::from_word_prefix(&word), zone);
    }

    #[test]
    fn prefix_ignores_trailing_bytes() {
        let word = Word::from_u64(u64::MAX);
        assert!(Address::from_word_prefix(&word).is_zero());
    }

    #[test]
    fn parses_checksummed_case() {
        let addr: Address = "0xABCDEF0000000000000000000000000000000001".parse().unwrap();
        assert_eq!(addr.as_bytes()[0], 0xab);
        assert_eq!(addr.to_hex(), "0xabcdef0000000000000000000000000000000001");
    }
}
