pub mod sha1;
pub mod text;

pub const BLOCK_SIZE: usize = 64;
const LENGTH_FIELD_SIZE: usize = 8;

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| format!("{byte:02x}")).collect::<Vec<_>>().join("")
}

pub fn hex_to_bytes(digits: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(digits)
}

/// Appends the `1` bit, zero padding and the big-endian bit length so that the
/// result is a whole number of 64-byte blocks.
pub(crate) fn pad_message(bytes: &[u8]) -> Vec<u8> {
    let message_length: u64 = (bytes.len() as u64).wrapping_mul(8);
    let mut message: Vec<u8> = Vec::with_capacity(padded_len(bytes.len()));
    message.extend_from_slice(bytes);
    message.push(0x80);

    while message.len() % BLOCK_SIZE != BLOCK_SIZE - LENGTH_FIELD_SIZE {
        message.push(0);
    }

    message.extend(message_length.to_be_bytes());
    message
}

pub(crate) fn padded_len(len: usize) -> usize {
    (len + 1 + LENGTH_FIELD_SIZE).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn hex_decodes_either_case() {
        assert_eq!(hex_to_bytes("000fA0fF").unwrap(), vec![0x00, 0x0f, 0xa0, 0xff]);
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert_eq!(hex_to_bytes("abc"), Err(hex::FromHexError::OddLength));
        assert_eq!(
            hex_to_bytes("0g"),
            Err(hex::FromHexError::InvalidHexCharacter { c: 'g', index: 1 })
        );
        assert_eq!(
            hex_to_bytes("zz00"),
            Err(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        );
    }

    #[test]
    fn padding_fits_in_one_block_up_to_55_bytes() {
        for len in [0, 1, 54, 55] {
            let padded = pad_message(&vec![b'a'; len]);
            assert_eq!(padded.len(), 64, "length {len}");
            assert_eq!(padded[len], 0x80);
            assert_eq!(&padded[56..], &((len as u64) * 8).to_be_bytes());
        }
    }

    #[test]
    fn padding_spills_into_extra_block() {
        for len in [56, 63, 64] {
            let padded = pad_message(&vec![b'a'; len]);
            assert_eq!(padded.len(), 128, "length {len}");
            assert_eq!(padded[len], 0x80);
            assert!(padded[len + 1..120].iter().all(|&b| b == 0));
            assert_eq!(&padded[120..], &((len as u64) * 8).to_be_bytes());
        }
    }

    #[test]
    fn padded_len_matches_padding() {
        for len in 0..200 {
            assert_eq!(padded_len(len), pad_message(&vec![0; len]).len());
        }
    }
}
