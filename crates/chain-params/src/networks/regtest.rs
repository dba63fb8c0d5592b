//! Local regression test network.

use shared_types::{u256_from_hex, Hash256, U256, COIN};

use super::mainnet::GENESIS_MERKLE_ROOT;
use crate::checkpoints::{ChainTxData, CheckpointData};
use crate::consensus::{Bip9Deployment, ConsensusParams, HeightActivations, NO_TIMEOUT};
use crate::errors::ChainParamsError;
use crate::genesis::create_default_genesis_block;
use crate::network::Network;
use crate::profile::{Base58Prefixes, MessageStart, NetworkProfile};

pub(super) const GENESIS_HASH: Hash256 =
    Hash256::from_display_hex("fd0aa94f9c3de3baa10f3d237ca99167cc5dd2a34acba0d2591741a515be645f");

pub(super) fn build() -> Result<NetworkProfile, ChainParamsError> {
    let genesis = create_default_genesis_block(1_541_030_400, 11, 0x207fffff, 1, 50 * COIN);

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.block_hash(),
        subsidy_halving_interval: 150,
        height_activations: HeightActivations {
            bip16_height: 0,
            bip34_height: 0,
            bip34_hash: Hash256::ZERO,
            bip65_height: 0,
            bip66_height: 0,
        },
        pow_limit: u256_from_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        pos_limit: u256_from_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        pos_no_retargeting: true,
        pow_target_spacing: 10,
        pow_target_timespan: 10 * 60,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: [
            Bip9Deployment::new(28, 0, NO_TIMEOUT),
            Bip9Deployment::new(0, 0, NO_TIMEOUT),
            Bip9Deployment::new(1, 0, NO_TIMEOUT),
        ],
        minimum_chain_work: U256::zero(),
        default_assume_valid: Hash256::ZERO,
        // Proof of work never ends on regtest.
        last_pow_block: i32::MAX,
        mpos_reward_recipients: 10,
        first_mpos_block: 5000,
        fix_utxo_cache_hf_height: 0,
    };

    let profile = NetworkProfile {
        network: Network::Regtest,
        consensus,
        genesis,
        message_start: MessageStart([0xfc, 0xc1, 0xb7, 0xdc]),
        default_port: 29981,
        prune_after_height: 1000,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![140],
            script_address: vec![141],
            secret_key: vec![239],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        },
        bech32_hrp: "ycrt".to_string(),
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        checkpoint_data: CheckpointData::new(&[(0, GENESIS_HASH)])?,
        chain_tx_data: ChainTxData::default(),
    };

    // Same coinbase as main, so the same merkle root.
    profile.verify_genesis(GENESIS_HASH, GENESIS_MERKLE_ROOT)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regtest_identity() {
        let profile = build().unwrap();
        assert_eq!(profile.id(), "regtest");
        assert_eq!(profile.default_port, 29981);
        assert_eq!(profile.bech32_hrp, "ycrt");
        assert!(profile.dns_seeds.is_empty());
        assert!(profile.fixed_seeds.is_empty());
        assert!(profile.default_consistency_checks);
        assert!(profile.mine_blocks_on_demand);
    }

    #[test]
    fn test_regtest_consensus() {
        let c = build().unwrap().consensus;
        assert_eq!(c.hash_genesis_block, GENESIS_HASH);
        assert!(c.is_pow_height(i32::MAX));
        assert_eq!(c.first_mpos_block, 5000);
        assert_eq!(c.difficulty_adjustment_interval(), 60);
        // The window is deliberately not timespan / spacing here.
        assert_ne!(i64::from(c.miner_confirmation_window), c.difficulty_adjustment_interval());
        assert!(c.pow_allow_min_difficulty_blocks);
    }
}
