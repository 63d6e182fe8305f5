use tracing::trace;

use crate::util::{pad_message, BLOCK_SIZE};

pub const DIGEST_SIZE: usize = 20;

pub type Digest = [u8; DIGEST_SIZE];

const H0: u32 = 0x67452301;
const H1: u32 = 0xEFCDAB89;
const H2: u32 = 0x98BADCFE;
const H3: u32 = 0x10325476;
const H4: u32 = 0xC3D2E1F0;

/// The five chaining registers of one SHA-1 computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HashState {
    h: [u32; 5],
}

impl Default for HashState {
    fn default() -> Self {
        HashState { h: [H0, H1, H2, H3, H4] }
    }
}

fn schedule(block: &[u8; BLOCK_SIZE]) -> [u32; 80] {
    let mut w: [u32; 80] = [0; 80];
    for (i, word) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
    }
    for i in 16..80 {
        w[i] = (w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16]).rotate_left(1);
    }
    w
}

impl HashState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Runs the 80 compression rounds over one 64-byte block.
    pub(crate) fn process_block(self, block: &[u8; BLOCK_SIZE]) -> HashState {
        let w = schedule(block);

        let [mut a, mut b, mut c, mut d, mut e] = self.h;

        for (i, &word) in w.iter().enumerate() {
            let (f, k) = match i {
                0..=19 => ((b & c) | ((!b) & d), 0x5A827999),
                20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
                _ => (b ^ c ^ d, 0xCA62C1D6),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        let [h0, h1, h2, h3, h4] = self.h;
        HashState {
            h: [
                h0.wrapping_add(a),
                h1.wrapping_add(b),
                h2.wrapping_add(c),
                h3.wrapping_add(d),
                h4.wrapping_add(e),
            ],
        }
    }

    pub(crate) fn digest(&self) -> Digest {
        let mut hash: Digest = [0; DIGEST_SIZE];
        for (i, word) in self.h.iter().enumerate() {
            hash[i*4..(i+1)*4].copy_from_slice(&word.to_be_bytes());
        }
        hash
    }
}

pub fn sha1_hash(bytes: &[u8]) -> Digest {
    let message = pad_message(bytes);
    let (blocks, rest) = message.as_chunks::<BLOCK_SIZE>();
    debug_assert!(rest.is_empty());
    trace!(input_len = bytes.len(), blocks = blocks.len(), "hashing");

    blocks
        .iter()
        .fold(HashState::new(), HashState::process_block)
        .digest()
}
