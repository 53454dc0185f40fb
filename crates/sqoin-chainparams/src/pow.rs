use num_bigint::BigUint;
use num_traits::One;

use crate::hash::Hash256;

/// Expands compact "nBits" into the full 256-bit proof target. `None` when
/// the sign bit is set or the value overflows 256 bits; no hash can meet
/// such a target.
pub fn expand_compact(bits: u32) -> Option<BigUint> {
    let mantissa = bits & 0x007f_ffff;
    if bits & 0x0080_0000 != 0 && mantissa != 0 {
        return None;
    }
    let exponent = (bits >> 24) as usize;
    let mut target = BigUint::from(mantissa);
    if exponent <= 3 {
        target >>= 8 * (3 - exponent);
    } else {
        target <<= 8 * (exponent - 3);
    }
    let limit: BigUint = BigUint::one() << 256usize;
    if target >= limit {
        return None;
    }
    Some(target)
}

/// Numeric check of a block hash against a compact-encoded target. The hash
/// bytes are read as a little-endian 256-bit integer.
pub fn hash_meets_target(hash: &Hash256, bits: u32) -> bool {
    match expand_compact(bits) {
        Some(target) => BigUint::from_bytes_le(hash) <= target,
        None => false,
    }
}
