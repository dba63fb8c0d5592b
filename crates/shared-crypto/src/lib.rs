//! # Shared Crypto - Hashing Primitives
//!
//! Pure hash functions consumed by the block and parameter crates.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256d | Block and transaction identifiers |
//! | `hashing` | Keccak-256 | Execution-layer trie roots |
//! | `merkle` | SHA-256d binary tree | Block merkle root |
//!
//! Every function here is deterministic and side-effect free.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;
pub mod merkle;

// Re-exports
pub use hashing::{keccak256, sha256d, Hash, Sha256dHasher};
pub use merkle::{compute_merkle_root, merkle_root};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
