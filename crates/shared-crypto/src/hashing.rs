//! # Hashing
//!
//! Double SHA-256 for block headers and transactions, Keccak-256 for the
//! execution-layer state and UTXO trie roots.
//!
//! Digests are returned in the byte order the hash function produces them
//! (the "internal" order). Display order for block hashes is the reverse and
//! is handled by `shared_types::Hash256`.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// 256-bit digest.
pub type Hash = [u8; 32];

/// Streaming double SHA-256 hasher.
///
/// Feeds data into a single SHA-256 and re-hashes the result on finalize.
#[derive(Clone, Default)]
pub struct Sha256dHasher {
    inner: Sha256,
}

impl Sha256dHasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return `SHA256(SHA256(data))`.
    pub fn finalize(self) -> Hash {
        let first = self.inner.finalize();
        Sha256::digest(first).into()
    }
}

/// Double SHA-256 (one-shot).
pub fn sha256d(data: &[u8]) -> Hash {
    let mut hasher = Sha256dHasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Keccak-256 (one-shot), the pre-standard SHA-3 variant used by the
/// execution layer.
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex32(s: &str) -> Hash {
        let mut out = [0u8; 32];
        out.copy_from_slice(&hex::decode(s).unwrap());
        out
    }

    #[test]
    fn test_sha256d_empty() {
        assert_eq!(
            sha256d(b""),
            hex32("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456")
        );
    }

    #[test]
    fn test_sha256d_hello() {
        assert_eq!(
            sha256d(b"hello"),
            hex32("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50")
        );
    }

    #[test]
    fn test_streaming_matches_oneshot() {
        let mut hasher = Sha256dHasher::new();
        hasher.update(b"hel").update(b"lo");
        assert_eq!(hasher.finalize(), sha256d(b"hello"));
    }

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            keccak256(b""),
            hex32("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn test_keccak256_empty_rlp_string() {
        // RLP("") = 0x80, the root of an empty Patricia trie.
        assert_eq!(
            keccak256(&[0x80]),
            hex32("56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421")
        );
    }
}
