//! # Genesis Block Construction
//!
//! Builds the first block of a chain from a handful of literals. The result
//! is hashed and compared against the values every other node pins, so each
//! byte here is consensus-critical.
//!
//! ## Layout
//!
//! ```text
//! Block
//! ├── header
//! │   ├── prev_blockhash  = 0
//! │   ├── merkle_root     = txid(coinbase)
//! │   ├── hash_state_root = GENESIS_STATE_ROOT
//! │   ├── hash_utxo_root  = keccak256(rlp(""))
//! │   ├── prevout_stake   = null
//! │   └── block_sig       = []
//! └── txdata[0] coinbase
//!     ├── vin[0]  prevout null, script_sig = OP_0 <488804799> <0x04> <message>
//!     └── vout[0] reward -> output_script
//! ```

use shared_crypto::{keccak256, merkle_root};
use shared_types::script::opcodes::{OP_0, OP_CHECKSIG};
use shared_types::{
    Amount, Block, BlockHeader, Hash256, OutPoint, Script, Transaction, TxIn, TxOut,
};

/// Message committed to by the genesis coinbase.
pub const GENESIS_MESSAGE: &str = "Nov 17, 2020 Abp new huns make coin bitcoin up up";

/// Uncompressed public key paid by the genesis coinbase.
pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = [
    0x04, 0x0d, 0x61, 0xd8, 0x65, 0x34, 0x48, 0xc9, 0x87, 0x31, 0xee, 0x5f, 0xff, 0xd3, 0x03, 0xc1,
    0x5e, 0x71, 0xec, 0x20, 0x57, 0xb7, 0x7f, 0x11, 0xab, 0x36, 0x01, 0x97, 0x97, 0x28, 0xcd, 0xaf,
    0xf2, 0xd6, 0x8a, 0xfb, 0xba, 0x14, 0xe4, 0xfa, 0x0b, 0xc4, 0x4f, 0x20, 0x72, 0xb0, 0xb2, 0x3e,
    0xf6, 0x37, 0x17, 0xf8, 0xcd, 0xfb, 0xe5, 0x8d, 0xcd, 0x33, 0xf3, 0x2b, 0x6a, 0xfe, 0x98, 0x74,
    0x1a,
];

/// Execution-state root of the genesis block, in internal byte order.
pub const GENESIS_STATE_ROOT: Hash256 =
    Hash256::from_internal_hex("e965ffd002cd6ad0e2dc402b8044de833e06b23127ea8c3d80aec91410771495");

/// Number pushed first in the genesis coinbase script.
pub const COINBASE_HEIGHT_MARKER: i64 = 488_804_799;

/// Root of an empty Merkle-Patricia trie: `keccak256(rlp(""))`.
#[must_use]
pub fn empty_utxo_root() -> Hash256 {
    Hash256::from_bytes(keccak256(&rlp::NULL_RLP))
}

/// `<GENESIS_OUTPUT_PUBKEY> OP_CHECKSIG`
#[must_use]
pub fn genesis_output_script() -> Script {
    Script::new()
        .push_slice(&GENESIS_OUTPUT_PUBKEY)
        .push_opcode(OP_CHECKSIG)
}

/// Build a genesis block committing to `message` and paying `reward` to
/// `output_script`.
#[must_use]
pub fn create_genesis_block(
    message: &[u8],
    output_script: &Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    let script_sig = Script::new()
        .push_opcode(OP_0)
        .push_int(COINBASE_HEIGHT_MARKER)
        .push_slice(&[0x04])
        .push_slice(message);

    let coinbase = Transaction {
        version: 1,
        input: vec![TxIn {
            previous_output: OutPoint::NULL,
            script_sig,
            sequence: u32::MAX,
        }],
        output: vec![TxOut {
            value: reward,
            script_pubkey: output_script.clone(),
        }],
        lock_time: 0,
    };

    let merkle = Hash256::from_bytes(merkle_root(&[*coinbase.txid().as_bytes()]));

    let header = BlockHeader {
        version,
        prev_blockhash: Hash256::ZERO,
        merkle_root: merkle,
        time,
        bits,
        nonce,
        hash_state_root: GENESIS_STATE_ROOT,
        hash_utxo_root: empty_utxo_root(),
        prevout_stake: OutPoint::NULL,
        block_sig: Vec::new(),
    };

    Block {
        header,
        txdata: vec![coinbase],
    }
}

/// Genesis block with this chain's message and output script.
#[must_use]
pub fn create_default_genesis_block(
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    create_genesis_block(
        GENESIS_MESSAGE.as_bytes(),
        &genesis_output_script(),
        time,
        nonce,
        bits,
        version,
        reward,
    )
}
