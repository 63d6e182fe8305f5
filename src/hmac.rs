//! HMAC-SHA1 (RFC 2104) on top of the SHA-1 engine in [`crate::util::sha1`].

use tracing::debug;

use crate::util::bytes_to_hex;
use crate::util::sha1::{sha1_hash, Digest, DIGEST_SIZE};
use crate::util::text::string_to_bytes;
use crate::util::BLOCK_SIZE;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Brings a key to exactly one block: keys longer than a block are hashed
/// first, shorter ones are right-padded with zeros.
pub fn prepare_key(key: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut block: [u8; BLOCK_SIZE] = [0; BLOCK_SIZE];
    if key.len() > BLOCK_SIZE {
        debug!(key_len = key.len(), "key longer than block size, hashing it down");
        block[..DIGEST_SIZE].copy_from_slice(&sha1_hash(key));
    } else {
        block[..key.len()].copy_from_slice(key);
    }
    block
}

fn xor_pad(key: &[u8; BLOCK_SIZE], pad: u8, capacity: usize) -> Vec<u8> {
    let mut v: Vec<u8> = Vec::with_capacity(BLOCK_SIZE + capacity);
    v.extend(key.iter().map(|byte| byte ^ pad));
    v
}

pub fn hmac_sha1_bytes(key: &[u8], message: &[u8]) -> Digest {
    let key = prepare_key(key);

    let mut inner = xor_pad(&key, IPAD, message.len());
    inner.extend_from_slice(message);
    let inner_hash = sha1_hash(&inner);

    let mut outer = xor_pad(&key, OPAD, DIGEST_SIZE);
    outer.extend_from_slice(&inner_hash);
    sha1_hash(&outer)
}

pub fn hmac_sha1(key: &str, message: &str) -> Digest {
    hmac_sha1_bytes(&string_to_bytes(key), &string_to_bytes(message))
}

pub fn hmac_sha1_hex(key: &str, message: &str) -> String {
    bytes_to_hex(&hmac_sha1(key, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_mac(key: &[u8], message: &[u8]) -> String {
        bytes_to_hex(&hmac_sha1_bytes(key, message))
    }

    #[test]
    fn quick_brown_fox() {
        let hex = hmac_sha1_hex("key", "The quick brown fox jumps over the lazy dog");
        assert_eq!(hex.len(), 40);
        assert_eq!(hex, "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
    }

    #[test]
    fn empty_key_and_message() {
        assert_eq!(hmac_sha1_hex("", ""), "fbdb1d1b18aa6c08324b7d64b71fb76370690e1d");
    }

    #[test]
    fn rfc2202_case_1() {
        assert_eq!(hex_mac(&[0x0b; 20], b"Hi There"), "b617318655057264e28bc0b6fb378c8ef146be00");
    }

    #[test]
    fn rfc2202_case_2() {
        assert_eq!(
            hex_mac(b"Jefe", b"what do ya want for nothing?"),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn rfc2202_case_3() {
        assert_eq!(hex_mac(&[0xaa; 20], &[0xdd; 50]), "125d7342b9ac11cd91a39af48aa17b4f63f175d3");
    }

    #[test]
    fn short_key_is_zero_padded() {
        let block = prepare_key(b"key");
        assert_eq!(&block[..3], b"key");
        assert!(block[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn block_sized_key_is_used_unmodified() {
        let key: Vec<u8> = (0..64).collect();
        assert_eq!(prepare_key(&key).as_slice(), key.as_slice());
    }

    #[test]
    fn long_key_is_hashed_then_padded() {
        let key = vec![b'k'; 65];
        let block = prepare_key(&key);
        assert_eq!(&block[..20], &sha1_hash(&key));
        assert!(block[20..].iter().all(|&b| b == 0));
    }
}
