use bytes::{BufMut, Bytes, BytesMut};
use dmap_types::Word;

use crate::hasher::keccak256;

/// Signature of the registry's write entry point.
pub const SET_SIGNATURE: &str = "set(bytes32,bytes32,bytes32)";

/// Length of a function selector.
pub const SELECTOR_LEN: usize = 4;

/// First four bytes of the Keccak-256 of a function signature.
pub fn selector(signature: &str) -> [u8; SELECTOR_LEN] {
    let digest = keccak256(signature.as_bytes());
    let mut out = [0u8; SELECTOR_LEN];
    out.copy_from_slice(&digest[..SELECTOR_LEN]);
    out
}

/// Calldata for a call whose arguments are all 32-byte words.
///
/// The arguments are already ABI-width, so they are concatenated after the
/// selector with no further padding.
pub fn encode_call(signature: &str, args: &[Word]) -> Bytes {
    let mut buf = BytesMut::with_capacity(SELECTOR_LEN + args.len() * Word::LEN);
    buf.put_slice(&selector(signature));
    for arg in args {
        buf.put_slice(arg.as_bytes());
    }
    buf.freeze()
}

/// Calldata for `set(name, meta, data)`.
pub fn encode_set_call(name: &Word, meta: &Word, data: &Word) -> Bytes {
    encode_call(SET_SIGNATURE, &[*name, *meta, *data])
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmap_types::encode_name;

    #[test]
    fn set_selector_vector() {
        assert_eq!(hex::encode(selector(SET_SIGNATURE)), "bb40a4a9");
    }

    #[test]
    fn transfer_selector_vector() {
        assert_eq!(hex::encode(selector("transfer(address,uint256)")), "a9059cbb");
    }

    #[test]
    fn set_call_layout() {
        let name = Word::new(encode_name("free").unwrap());
        let meta = Word::from_u64(1);
        let data = Word::new([0xaa; 32]);
        let calldata = encode_set_call(&name, &meta, &data);

        assert_eq!(calldata.len(), SELECTOR_LEN + 3 * 32);
        assert_eq!(&calldata[..4], &[0xbb, 0x40, 0xa4, 0xa9]);
        assert_eq!(&calldata[4..36], name.as_bytes());
        assert_eq!(&calldata[36..68], meta.as_bytes());
        assert_eq!(&calldata[68..], data.as_bytes());
    }

    #[test]
    fn call_without_arguments_is_just_the_selector() {
        let calldata = encode_call("get()", &[]);
        assert_eq!(calldata.as_ref(), selector("get()").as_slice());
    }
}
