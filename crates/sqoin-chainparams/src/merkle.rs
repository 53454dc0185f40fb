use crate::hash::{sha256d, Hash256};

/// Merkle root over already-computed txids. Pairs combine left to right;
/// an odd tail pairs with itself. A single-element list is its own root.
pub fn merkle_root_txids(txids: &[Hash256]) -> Hash256 {
    assert!(!txids.is_empty(), "merkle root of empty transaction list");

    let mut level: Vec<Hash256> = txids.to_vec();
    let mut preimage = [0u8; 64];
    while level.len() > 1 {
        let mut next: Vec<Hash256> = Vec::with_capacity((level.len() + 1) / 2);
        let mut i = 0usize;
        while i < level.len() {
            let left = &level[i];
            let right = if i + 1 < level.len() {
                &level[i + 1]
            } else {
                left
            };
            preimage[..32].copy_from_slice(left);
            preimage[32..].copy_from_slice(right);
            next.push(sha256d(&preimage));
            i += 2;
        }
        level = next;
    }
    level[0]
}
