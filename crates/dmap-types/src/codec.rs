//! Fixed-width hex and byte conversions.
//!
//! Every value that crosses the storage boundary is a fixed-width field: 32-byte
//! words and slots, 20-byte zones, 32-byte names. These helpers turn integers,
//! strings and byte slices into `0x`-prefixed hex and pad values to an exact
//! width. Padding never truncates; a value that is wider than its field is an
//! [`CodecError::Overflow`].

use crate::error::{CodecError, CodecResult};

/// Width of an encoded name, in bytes.
pub const NAME_LEN: usize = 32;

const HEX_PREFIX: &str = "0x";

/// Conversion to `0x`-prefixed lowercase hex.
///
/// Unsigned integers produce their minimal even-length big-endian form, so
/// `0` is `0x00` and `256` is `0x0100`. Strings and byte slices are encoded
/// byte for byte.
pub trait Hexlify {
    fn hexlify(&self) -> String;
}

macro_rules! impl_hexlify_uint {
    ($($t:ty),*) => {
        $(
            impl Hexlify for $t {
                fn hexlify(&self) -> String {
                    hexlify_uint(&self.to_be_bytes())
                }
            }
        )*
    };
}

impl_hexlify_uint!(u8, u16, u32, u64, u128, usize);

impl Hexlify for str {
    fn hexlify(&self) -> String {
        self.as_bytes().hexlify()
    }
}

impl Hexlify for [u8] {
    fn hexlify(&self) -> String {
        format!("{HEX_PREFIX}{}", hex::encode(self))
    }
}

impl<const N: usize> Hexlify for [u8; N] {
    fn hexlify(&self) -> String {
        self.as_slice().hexlify()
    }
}

/// Hex for an arbitrarily wide unsigned integer given as big-endian bytes.
///
/// Leading zero bytes are dropped; an all-zero (or empty) input is `0x00`.
pub fn hexlify_uint(be_bytes: &[u8]) -> String {
    match be_bytes.iter().position(|b| *b != 0) {
        Some(first) => be_bytes[first..].hexlify(),
        None => format!("{HEX_PREFIX}00"),
    }
}

/// Strip an optional `0x`/`0X` prefix.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Left-pad a hex value with zeros to exactly `len` bytes.
///
/// The result is `0x` followed by `2 * len` lowercase hex digits. Fails with
/// [`CodecError::Overflow`] when the value already has more than `2 * len`
/// digits.
///
/// ```
/// use dmap_types::codec::{zero_pad, Hexlify};
///
/// assert_eq!(zero_pad(&255u32.hexlify(), 4).unwrap(), "0x000000ff");
/// assert!(zero_pad("0x010203", 2).is_err());
/// ```
pub fn zero_pad(value: &str, len: usize) -> CodecResult<String> {
    let digits = strip_hex_prefix(value);
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidHex(format!(
            "unexpected character {c:?} in {value:?}"
        )));
    }
    let width = 2 * len;
    if digits.len() > width {
        return Err(CodecError::Overflow {
            capacity: len,
            actual: digits.len().div_ceil(2),
        });
    }
    Ok(format!(
        "{HEX_PREFIX}{:0>width$}",
        digits.to_ascii_lowercase()
    ))
}

/// Copy `bytes` into the low end of an `N`-byte array.
pub fn left_pad<const N: usize>(bytes: &[u8]) -> CodecResult<[u8; N]> {
    if bytes.len() > N {
        return Err(CodecError::Overflow {
            capacity: N,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

/// Copy `bytes` into the high end of an `N`-byte array.
pub fn right_pad<const N: usize>(bytes: &[u8]) -> CodecResult<[u8; N]> {
    if bytes.len() > N {
        return Err(CodecError::Overflow {
            capacity: N,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

/// Encode a registry name into its 32-byte field (right zero-padded).
pub fn encode_name(name: &str) -> CodecResult<[u8; NAME_LEN]> {
    right_pad::<NAME_LEN>(name.as_bytes())
}

/// Decode a hex string, with or without the `0x` prefix.
pub fn decode_hex(s: &str) -> CodecResult<Vec<u8>> {
    hex::decode(strip_hex_prefix(s)).map_err(|e| CodecError::InvalidHex(e.to_string()))
}

/// Decode a hex string that must be exactly `N` bytes long.
pub fn decode_fixed<const N: usize>(s: &str) -> CodecResult<[u8; N]> {
    let bytes = decode_hex(s)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| CodecError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        })
}
