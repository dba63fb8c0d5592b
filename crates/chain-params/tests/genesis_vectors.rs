//! Genesis regression vectors.
//!
//! These pin the exact bytes every node agrees on. If any of them changes,
//! the node would fork itself off the network at block zero.

use chain_params::genesis::{create_default_genesis_block, GENESIS_STATE_ROOT};
use chain_params::{Network, NetworkProfile};
use proptest::prelude::*;
use shared_types::{serialize, Hash256, COIN};

const MAIN_GENESIS: &str = "00008435a6d3dd42fd2bc7407d5ff591cfd88d59d3283f50c93ccc1f381dfdfe";
const REGTEST_GENESIS: &str = "fd0aa94f9c3de3baa10f3d237ca99167cc5dd2a34acba0d2591741a515be645f";
const MERKLE_ROOT: &str = "efd0a530a4567e676430e0a6ea6f3c7c3c2b3873769fc33ee902876634465843";

#[test]
fn test_genesis_hashes_per_network() {
    let expected = [
        (Network::Main, MAIN_GENESIS),
        (Network::Test, MAIN_GENESIS),
        (Network::Regtest, REGTEST_GENESIS),
        (Network::UnitTest, REGTEST_GENESIS),
    ];

    for (network, hash) in expected {
        let profile = NetworkProfile::build(network).unwrap();
        assert_eq!(profile.genesis.block_hash().to_string(), hash, "{network}");
        assert_eq!(profile.genesis.header.merkle_root.to_string(), MERKLE_ROOT, "{network}");
    }
}

#[test]
fn test_main_genesis_meets_its_target() {
    let profile = NetworkProfile::build(Network::Main).unwrap();
    let target = chain_params::pow::target_from_compact(profile.genesis.header.bits).target;
    assert!(profile.genesis.block_hash().to_u256() <= target);
}

#[test]
fn test_main_genesis_header_bytes() {
    let block = create_default_genesis_block(1_605_588_500, 214_381, 0x1f00ffff, 1, 50 * COIN);
    let bytes = serialize(&block.header);

    // 80-byte legacy prefix, two 32-byte roots, 36-byte stake prevout, empty signature.
    assert_eq!(bytes.len(), 181);
    assert_eq!(&bytes[..4], &1i32.to_le_bytes());
    assert!(bytes[4..36].iter().all(|&b| b == 0));
    assert_eq!(&bytes[68..72], &1_605_588_500u32.to_le_bytes());
    assert_eq!(&bytes[72..76], &0x1f00ffffu32.to_le_bytes());
    assert_eq!(&bytes[76..80], &214_381u32.to_le_bytes());
    assert_eq!(&bytes[80..112], GENESIS_STATE_ROOT.as_bytes());
    assert_eq!(
        hex::encode(&bytes[112..144]),
        "56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421"
    );
    assert!(bytes[144..176].iter().all(|&b| b == 0));
    assert_eq!(&bytes[176..180], &[0xff; 4]);
    assert_eq!(bytes[180], 0x00);
}

#[test]
fn test_next_nonce_changes_hash() {
    let block = create_default_genesis_block(1_605_588_500, 214_382, 0x1f00ffff, 1, 50 * COIN);
    let expected: Hash256 = "e391837d81fbcbc119c4e2364989de9ddbb264de2adef8618b225d45653b06f8"
        .parse()
        .unwrap();
    assert_eq!(block.block_hash(), expected);
    assert_eq!(block.header.merkle_root.to_string(), MERKLE_ROOT);
}

proptest! {
    #[test]
    fn prop_any_other_nonce_changes_genesis(nonce in any::<u32>()) {
        prop_assume!(nonce != 214_381);
        let block = create_default_genesis_block(1_605_588_500, nonce, 0x1f00ffff, 1, 50 * COIN);
        prop_assert_ne!(block.block_hash().to_string(), MAIN_GENESIS);
        // The coinbase does not depend on the nonce.
        prop_assert_eq!(block.header.merkle_root.to_string(), MERKLE_ROOT);
    }

    #[test]
    fn prop_reward_changes_merkle_root(reward in 1i64..(21_000_000 * COIN)) {
        prop_assume!(reward != 50 * COIN);
        let block = create_default_genesis_block(1_605_588_500, 214_381, 0x1f00ffff, 1, reward);
        prop_assert_ne!(block.header.merkle_root.to_string(), MERKLE_ROOT);
    }
}
