//! Public test network. Shares the production genesis block.

use shared_types::{u256_from_hex, Hash256, U256, COIN};

use super::mainnet::{GENESIS_BITS, GENESIS_HASH, GENESIS_MERKLE_ROOT, GENESIS_NONCE, GENESIS_TIME};
use crate::checkpoints::{ChainTxData, CheckpointData};
use crate::consensus::{Bip9Deployment, ConsensusParams, HeightActivations, NO_TIMEOUT};
use crate::errors::ChainParamsError;
use crate::genesis::create_default_genesis_block;
use crate::network::Network;
use crate::profile::{Base58Prefixes, MessageStart, NetworkProfile};
use crate::seeds::{TEST_DNS_SEEDS, TEST_FIXED_SEEDS};

pub(super) fn build() -> Result<NetworkProfile, ChainParamsError> {
    let genesis = create_default_genesis_block(GENESIS_TIME, GENESIS_NONCE, GENESIS_BITS, 1, 50 * COIN);

    let last_pow_block = 5000;
    let mpos_reward_recipients = 10;

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.block_hash(),
        subsidy_halving_interval: 2_102_400,
        height_activations: HeightActivations {
            bip16_height: 0,
            bip34_height: 0,
            bip34_hash: GENESIS_HASH,
            bip65_height: 0,
            bip66_height: 0,
        },
        pow_limit: u256_from_hex("0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        pos_limit: u256_from_hex("0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: true,
        pos_no_retargeting: false,
        pow_target_spacing: 60,
        pow_target_timespan: 10 * 60,
        // 75% for test chains
        rule_change_activation_threshold: 1512,
        miner_confirmation_window: 2016,
        deployments: [
            Bip9Deployment::new(28, 1_514_764_800, 1_546_300_799),
            Bip9Deployment::new(0, 0, NO_TIMEOUT),
            Bip9Deployment::new(1, 0, NO_TIMEOUT),
        ],
        minimum_chain_work: U256::zero(),
        default_assume_valid: Hash256::from_display_hex(
            "39ffa0c5924550db0e75030ff8513c3145d491dff2e17b8e3ea1cea7b4662ff0",
        ),
        last_pow_block,
        mpos_reward_recipients,
        first_mpos_block: ConsensusParams::derive_first_mpos_block(
            last_pow_block,
            mpos_reward_recipients,
        ),
        fix_utxo_cache_hf_height: 84_500,
    };

    let profile = NetworkProfile {
        network: Network::Test,
        consensus,
        genesis,
        message_start: MessageStart([0xd0, 0x13, 0x09, 0x11]),
        default_port: 19981,
        prune_after_height: 1000,
        dns_seeds: TEST_DNS_SEEDS.iter().map(|s| s.to_string()).collect(),
        fixed_seeds: TEST_FIXED_SEEDS.to_vec(),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![83],
            script_address: vec![24],
            secret_key: vec![239],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        },
        bech32_hrp: "ta".to_string(),
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        checkpoint_data: CheckpointData::new(&[(0, GENESIS_HASH)])?,
        chain_tx_data: ChainTxData::default(),
    };

    profile.verify_genesis(GENESIS_HASH, GENESIS_MERKLE_ROOT)?;
    Ok(profile)
}
