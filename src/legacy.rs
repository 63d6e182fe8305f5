//! Bit-exact reproduction of the older text handling, where keys and messages
//! were turned into one entry per UTF-16 code unit and the digest re-expanded
//! every entry above 0x7F into a UTF-8 style sequence.
//!
//! Only ASCII input without CR LF pairs hashes the same as the standard path.
//! Everything is computed on `u16` code units so that values above 0xFF (from
//! the key or message text) survive the pad XOR just as they used to.

use crate::util::sha1::{sha1_hash, Digest};
use crate::util::BLOCK_SIZE;

const CR: u16 = 0x0d;
const LF: u16 = 0x0a;

/// One code unit per character. Characters outside the Basic Multilingual
/// Plane contribute only their high surrogate.
pub fn string_to_code_units(text: &str) -> Vec<u16> {
    text.chars()
        .map(|c| {
            let mut buf: [u16; 2] = [0; 2];
            c.encode_utf16(&mut buf)[0]
        })
        .collect()
}

/// Collapses CR LF to LF, then writes each code unit as one, two or three
/// bytes. Surrogates are encoded like any other unit.
pub fn utf8_expand(units: &[u16]) -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::with_capacity(units.len());
    for (i, &c) in units.iter().enumerate() {
        if c == CR && units.get(i + 1) == Some(&LF) {
            continue;
        }
        match c {
            0..=0x7f => bytes.push(c as u8),
            0x80..=0x7ff => {
                bytes.push(((c >> 6) as u8) | 0xc0);
                bytes.push(((c & 0x3f) as u8) | 0x80);
            }
            _ => {
                bytes.push(((c >> 12) as u8) | 0xe0);
                bytes.push((((c >> 6) & 0x3f) as u8) | 0x80);
                bytes.push(((c & 0x3f) as u8) | 0x80);
            }
        }
    }
    bytes
}

pub fn legacy_sha1(units: &[u16]) -> Digest {
    sha1_hash(&utf8_expand(units))
}

fn widen(bytes: &[u8]) -> impl Iterator<Item = u16> + '_ {
    bytes.iter().map(|&b| u16::from(b))
}

pub fn legacy_hmac_sha1(key: &str, message: &str) -> Digest {
    let mut key = string_to_code_units(key);
    if key.len() > BLOCK_SIZE {
        key = widen(&legacy_sha1(&key)).collect();
    }
    key.resize(BLOCK_SIZE, 0);

    let mut inner: Vec<u16> = key.iter().map(|unit| unit ^ 0x36).collect();
    inner.extend(string_to_code_units(message));
    let inner_hash = legacy_sha1(&inner);

    let mut outer: Vec<u16> = key.iter().map(|unit| unit ^ 0x5c).collect();
    outer.extend(widen(&inner_hash));
    legacy_sha1(&outer)
}
