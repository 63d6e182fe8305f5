use std::path::Path;

use thiserror::Error;

mod hmac;
pub mod legacy;
mod util;

pub use hmac::{hmac_sha1, hmac_sha1_bytes, hmac_sha1_hex, prepare_key};
pub use util::sha1::{sha1_hash, Digest, DIGEST_SIZE};
pub use util::text::{string_to_bytes, url_encode};
pub use util::{bytes_to_hex, hex_to_bytes, BLOCK_SIZE};

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read message: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed hex key: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("{0} needs text input but was given raw bytes")]
    NotText(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn read_message<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read message");
    Ok(bytes)
}
