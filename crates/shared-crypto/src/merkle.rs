//! # Block Merkle Root
//!
//! Binary hash tree over transaction ids where each parent is
//! `SHA256d(left || right)`.
//!
//! ## Algorithm
//!
//! 1. Start from the leaf hashes in block order
//! 2. If a level has an odd count, the last hash is paired with itself
//! 3. Repeat until one hash remains
//!
//! A single leaf is its own root. An empty list yields the all-zero hash.
//!
//! Duplicating the last element makes `[a, b, c]` and `[a, b, c, c]` share a
//! root (CVE-2012-2459). [`compute_merkle_root`] reports that case so callers
//! can reject the block instead of caching it as invalid.

use crate::hashing::{Hash, Sha256dHasher};

/// Compute the merkle root and whether the leaf list was mutated.
///
/// `mutated` is true when some level contains two identical adjacent hashes
/// at an even/odd pair position.
pub fn compute_merkle_root(mut hashes: Vec<Hash>) -> (Hash, bool) {
    let mut mutated = false;

    if hashes.is_empty() {
        return ([0u8; 32], mutated);
    }

    while hashes.len() > 1 {
        for pair in hashes.chunks_exact(2) {
            if pair[0] == pair[1] {
                mutated = true;
            }
        }

        if hashes.len() % 2 == 1 {
            let last = hashes[hashes.len() - 1];
            hashes.push(last);
        }

        hashes = hashes
            .chunks_exact(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }

    (hashes[0], mutated)
}

/// Merkle root of the given leaves, ignoring mutation.
pub fn merkle_root(hashes: &[Hash]) -> Hash {
    compute_merkle_root(hashes.to_vec()).0
}

fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256dHasher::new();
    hasher.update(left).update(right);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_root_is_zero() {
        assert_eq!(merkle_root(&[]), [0u8; 32]);
    }

    #[test]
    fn test_single_leaf_is_root() {
        let leaf = [0x11u8; 32];
        let (root, mutated) = compute_merkle_root(vec![leaf]);
        assert_eq!(root, leaf);
        assert!(!mutated);
    }

    #[test]
    fn test_two_leaves() {
        let a = [0x01u8; 32];
        let b = [0x02u8; 32];
        assert_eq!(merkle_root(&[a, b]), hash_pair(&a, &b));
    }

    #[test]
    fn test_odd_level_duplicates_last() {
        let a = [0x01u8; 32];
        let b = [0x02u8; 32];
        let c = [0x03u8; 32];
        let expected = hash_pair(&hash_pair(&a, &b), &hash_pair(&c, &c));
        assert_eq!(merkle_root(&[a, b, c]), expected);
    }

    #[test]
    fn test_duplicate_tail_is_flagged() {
        let a = [0x01u8; 32];
        let b = [0x02u8; 32];
        let c = [0x03u8; 32];

        let (honest, honest_mutated) = compute_merkle_root(vec![a, b, c]);
        let (forged, forged_mutated) = compute_merkle_root(vec![a, b, c, c]);

        assert_eq!(honest, forged);
        assert!(!honest_mutated);
        assert!(forged_mutated);
    }

    #[test]
    fn test_order_matters() {
        let a = [0x01u8; 32];
        let b = [0x02u8; 32];
        assert_ne!(merkle_root(&[a, b]), merkle_root(&[b, a]));
    }
}
