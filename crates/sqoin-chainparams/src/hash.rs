use sha2::{Digest, Sha256};

use crate::error::{ChainError, ErrorCode};

/// 32-byte hash in internal (little-endian) byte order. Display form is the
/// byte-reversed hex string, as block explorers print it.
pub type Hash256 = [u8; 32];

pub const ZERO_HASH: Hash256 = [0u8; 32];

pub fn sha256d(b: &[u8]) -> Hash256 {
    let mut h = Sha256::new();
    h.update(b);
    let first = h.finalize();
    let mut h = Sha256::new();
    h.update(first);
    let out = h.finalize();
    let mut r = [0u8; 32];
    r.copy_from_slice(&out);
    r
}

/// Parses a hash literal written in display order (optionally `0x`-prefixed)
/// into internal order. Shorter literals are left-padded with zeros; the
/// upstream parameter tables carry a few of those.
pub fn hash_from_hex(s: &str) -> Result<Hash256, ChainError> {
    let t = s.strip_prefix("0x").unwrap_or(s);
    if t.len() > 64 {
        return Err(ChainError::new(
            ErrorCode::ChainErrBadHex,
            "hash literal longer than 32 bytes",
        ));
    }
    let padded = format!("{:0>64}", t);
    let raw = hex::decode(padded)
        .map_err(|_| ChainError::new(ErrorCode::ChainErrBadHex, "hash literal is not hex"))?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&raw);
    out.reverse();
    Ok(out)
}

pub fn hash_to_hex(h: &Hash256) -> String {
    let mut rev = *h;
    rev.reverse();
    hex::encode(rev)
}

pub fn is_zero_hash(h: &Hash256) -> bool {
    h.iter().all(|&b| b == 0)
}
