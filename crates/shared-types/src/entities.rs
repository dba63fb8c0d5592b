//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Values**: `Hash256`, `U256`, `Amount`
//! - **Transactions**: `OutPoint`, `TxIn`, `TxOut`, `Transaction`
//! - **Blocks**: `BlockHeader`, `Block`
//!
//! ## Byte Order
//!
//! `Hash256` stores the digest exactly as the hash function produced it
//! (internal order). Explorers and the hard-coded literals show block and
//! transaction hashes byte-reversed (display order), so `Display`, `FromStr`
//! and [`Hash256::from_display_hex`] reverse; [`Hash256::from_internal_hex`]
//! does not.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_crypto::{compute_merkle_root, Sha256dHasher};

use crate::encoding::{write_var_bytes, Encodable};
use crate::errors::HexError;
use crate::script::Script;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

// =============================================================================
// VALUES
// =============================================================================

/// Amount in base units (satoshi-equivalents).
pub type Amount = i64;

/// Base units per coin.
pub const COIN: Amount = 100_000_000;

/// A 256-bit hash in internal byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The all-zero ("null") hash.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap raw internal-order bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-digit literal written in display order.
    ///
    /// Intended for `const` items: a malformed literal is a compile error
    /// there.
    pub const fn from_display_hex(s: &str) -> Self {
        let digits = s.as_bytes();
        assert!(digits.len() == 64, "256-bit literal must be 64 hex digits");
        let mut out = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            out[31 - i] = (hex_val(digits[2 * i]) << 4) | hex_val(digits[2 * i + 1]);
            i += 1;
        }
        Self(out)
    }

    /// Parse a 64-digit literal written in internal byte order.
    pub const fn from_internal_hex(s: &str) -> Self {
        let digits = s.as_bytes();
        assert!(digits.len() == 64, "256-bit literal must be 64 hex digits");
        let mut out = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            out[i] = (hex_val(digits[2 * i]) << 4) | hex_val(digits[2 * i + 1]);
            i += 1;
        }
        Self(out)
    }

    /// Parse runtime input in display order.
    ///
    /// Accepts an optional `0x` prefix and fewer than 64 digits (the value
    /// is left-padded with zeros), matching how hashes are typed on the
    /// command line.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(HexError::Empty);
        }
        if digits.len() > 64 {
            return Err(HexError::TooLong {
                digits: digits.len(),
            });
        }

        let padded = format!("{digits:0>64}");
        let mut out = [0u8; 32];
        hex::decode_to_slice(&padded, &mut out)?;
        out.reverse();
        Ok(Self(out))
    }

    /// Internal-order bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// True for the all-zero hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Interpret the hash as a little-endian 256-bit integer, the way
    /// proof-of-work compares a block hash with its target.
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }
}

const fn hex_val(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in 256-bit literal"),
    }
}

/// Parse a 64-digit big-endian literal into a `U256` at compile time.
pub const fn u256_from_hex(s: &str) -> U256 {
    let digits = s.as_bytes();
    assert!(digits.len() == 64, "256-bit literal must be 64 hex digits");
    let mut limbs = [0u64; 4];
    let mut i = 0;
    while i < 64 {
        let limb = 3 - i / 16;
        limbs[limb] = (limbs[limb] << 4) | hex_val(digits[i]) as u64;
        i += 1;
    }
    U256(limbs)
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut display = self.0;
        display.reverse();
        f.write_str(&hex::encode(display))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({self})")
    }
}

impl FromStr for Hash256 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Encodable for Hash256 {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Reference to a transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Id of the transaction holding the output.
    pub txid: Hash256,
    /// Output index.
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs and carried by
    /// proof-of-work headers.
    pub const NULL: Self = Self {
        txid: Hash256::ZERO,
        vout: u32::MAX,
    };

    /// True for [`OutPoint::NULL`].
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl Default for OutPoint {
    fn default() -> Self {
        Self::NULL
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.txid.consensus_encode(out);
        self.vout.consensus_encode(out);
    }
}

/// Transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    /// Output being spent.
    pub previous_output: OutPoint,
    /// Unlocking script (arbitrary data for coinbase inputs).
    pub script_sig: Script,
    /// Sequence number.
    pub sequence: u32,
}

impl Encodable for TxIn {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.previous_output.consensus_encode(out);
        self.script_sig.consensus_encode(out);
        self.sequence.consensus_encode(out);
    }
}

/// Transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Value in base units.
    pub value: Amount,
    /// Spend condition.
    pub script_pubkey: Script,
}

impl Encodable for TxOut {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.value.consensus_encode(out);
        self.script_pubkey.consensus_encode(out);
    }
}

/// A transaction without witness data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction format version.
    pub version: i32,
    /// Inputs.
    pub input: Vec<TxIn>,
    /// Outputs.
    pub output: Vec<TxOut>,
    /// Earliest height or time the transaction may be mined.
    pub lock_time: u32,
}

impl Transaction {
    /// Transaction id: double SHA-256 of the encoding.
    pub fn txid(&self) -> Hash256 {
        let mut hasher = Sha256dHasher::new();
        hasher.update(&crate::encoding::serialize(self));
        Hash256(hasher.finalize())
    }

    /// A coinbase has exactly one input spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }

    /// Sum of output values.
    pub fn total_output(&self) -> Amount {
        self.output.iter().map(|o| o.value).sum()
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.version.consensus_encode(out);
        self.input.consensus_encode(out);
        self.output.consensus_encode(out);
        self.lock_time.consensus_encode(out);
    }
}

// =============================================================================
// BLOCKS
// =============================================================================

/// Block header with the execution-layer and proof-of-stake extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block version (also carries deployment signalling bits).
    pub version: i32,
    /// Hash of the parent block, zero for genesis.
    pub prev_blockhash: Hash256,
    /// Merkle root of the block's transaction ids.
    pub merkle_root: Hash256,
    /// Block time (unix seconds).
    pub time: u32,
    /// Compact difficulty target.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
    /// Root of the execution-layer account state trie.
    pub hash_state_root: Hash256,
    /// Root of the execution-layer UTXO trie.
    pub hash_utxo_root: Hash256,
    /// Staked output for proof-of-stake blocks, null otherwise.
    pub prevout_stake: OutPoint,
    /// Block signature for proof-of-stake blocks, empty otherwise.
    pub block_sig: Vec<u8>,
}

impl BlockHeader {
    /// Header hash: double SHA-256 of the encoded header.
    pub fn block_hash(&self) -> Hash256 {
        let mut hasher = Sha256dHasher::new();
        hasher.update(&crate::encoding::serialize(self));
        Hash256(hasher.finalize())
    }

    /// True if the header commits to a staked output.
    pub fn is_proof_of_stake(&self) -> bool {
        !self.prevout_stake.is_null()
    }

    /// True if the header is mined.
    pub fn is_proof_of_work(&self) -> bool {
        !self.is_proof_of_stake()
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.version.consensus_encode(out);
        self.prev_blockhash.consensus_encode(out);
        self.merkle_root.consensus_encode(out);
        self.time.consensus_encode(out);
        self.bits.consensus_encode(out);
        self.nonce.consensus_encode(out);
        self.hash_state_root.consensus_encode(out);
        self.hash_utxo_root.consensus_encode(out);
        self.prevout_stake.consensus_encode(out);
        write_var_bytes(out, &self.block_sig);
    }
}

/// A block: header plus transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// The block header.
    pub header: BlockHeader,
    /// Transactions in block order.
    pub txdata: Vec<Transaction>,
}

impl Block {
    /// Hash of the header.
    pub fn block_hash(&self) -> Hash256 {
        self.header.block_hash()
    }

    /// Recompute the merkle root over `txdata`.
    pub fn compute_merkle_root(&self) -> Hash256 {
        let leaves = self.txdata.iter().map(|tx| tx.txid().0).collect();
        Hash256(compute_merkle_root(leaves).0)
    }

    /// True if the header's merkle root commits to `txdata`.
    pub fn check_merkle_root(&self) -> bool {
        self.compute_merkle_root() == self.header.merkle_root
    }
}

impl Encodable for Block {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.header.consensus_encode(out);
        self.txdata.consensus_encode(out);
    }
}
