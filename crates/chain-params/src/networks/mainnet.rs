//! Production network.

use shared_types::{u256_from_hex, Hash256, U256, COIN};

use crate::checkpoints::{ChainTxData, CheckpointData};
use crate::consensus::{Bip9Deployment, ConsensusParams, HeightActivations, NO_TIMEOUT};
use crate::errors::ChainParamsError;
use crate::genesis::create_default_genesis_block;
use crate::network::Network;
use crate::profile::{Base58Prefixes, MessageStart, NetworkProfile};
use crate::seeds::{MAIN_DNS_SEEDS, MAIN_FIXED_SEEDS};

pub(super) const GENESIS_HASH: Hash256 =
    Hash256::from_display_hex("00008435a6d3dd42fd2bc7407d5ff591cfd88d59d3283f50c93ccc1f381dfdfe");

pub(super) const GENESIS_MERKLE_ROOT: Hash256 =
    Hash256::from_display_hex("efd0a530a4567e676430e0a6ea6f3c7c3c2b3873769fc33ee902876634465843");

pub(super) const GENESIS_TIME: u32 = 1_605_588_500;
pub(super) const GENESIS_NONCE: u32 = 214_381;
pub(super) const GENESIS_BITS: u32 = 0x1f00ffff;

const CHECKPOINTS: [(i32, Hash256); 6] = [
    (0, GENESIS_HASH),
    (
        5000,
        Hash256::from_display_hex("000026e781f70287b9519cb5d8e5f9f75295a4aec15983977f53cd40f8f7c5e6"),
    ),
    (
        5500,
        Hash256::from_display_hex("6007ab7c095ae536c0324756e3b70d04be267f470a435e93bcbecf7f2dda0218"),
    ),
    (
        6000,
        Hash256::from_display_hex("b2c53112b7abdb6b52f07c152c6ffe582c486ff5fd1ed5edec6da6bb8b77c693"),
    ),
    (
        7000,
        Hash256::from_display_hex("2b76d4cb419ea040c1c15449b730419f71babcc4e7be7e82f34bc113720be71e"),
    ),
    (
        7700,
        Hash256::from_display_hex("5da747c6b169b337e528f77bbb01d76ae56e0dbd3ea6ae1b431abe41e9246672"),
    ),
];

pub(super) fn build() -> Result<NetworkProfile, ChainParamsError> {
    let genesis = create_default_genesis_block(GENESIS_TIME, GENESIS_NONCE, GENESIS_BITS, 1, 50 * COIN);

    let last_pow_block = 5000;
    let mpos_reward_recipients = 10;

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.block_hash(),
        // Four years of one-minute blocks.
        subsidy_halving_interval: 2_102_400,
        height_activations: HeightActivations {
            bip16_height: 0,
            bip34_height: 0,
            bip34_hash: GENESIS_HASH,
            bip65_height: 0,
            bip66_height: 0,
        },
        pow_limit: u256_from_hex("0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        pos_limit: u256_from_hex("00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: true,
        pos_no_retargeting: false,
        pow_target_spacing: 60,
        pow_target_timespan: 10 * 60,
        // 95% of 2016
        rule_change_activation_threshold: 1916,
        miner_confirmation_window: 2016,
        deployments: [
            // 2018-01-01 00:00:00 UTC to 2018-12-31 23:59:59 UTC
            Bip9Deployment::new(28, 1_514_764_800, 1_546_300_799),
            Bip9Deployment::new(0, 0, NO_TIMEOUT),
            Bip9Deployment::new(1, 0, NO_TIMEOUT),
        ],
        minimum_chain_work: U256::zero(),
        default_assume_valid: Hash256::from_display_hex(
            "bfbbfc2c3be3d4e085082aff2e4e73a4e21dbf6205bc41b84b38ffac0a8bc114",
        ),
        last_pow_block,
        mpos_reward_recipients,
        first_mpos_block: ConsensusParams::derive_first_mpos_block(
            last_pow_block,
            mpos_reward_recipients,
        ),
        fix_utxo_cache_hf_height: 100_000,
    };

    let profile = NetworkProfile {
        network: Network::Main,
        consensus,
        genesis,
        message_start: MessageStart([0xf2, 0xbf, 0x6b, 0xc0]),
        default_port: 9981,
        prune_after_height: 100_000,
        dns_seeds: MAIN_DNS_SEEDS.iter().map(|s| s.to_string()).collect(),
        fixed_seeds: MAIN_FIXED_SEEDS.to_vec(),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![23],
            script_address: vec![83],
            secret_key: vec![128],
            ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
        },
        bech32_hrp: "ac".to_string(),
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        checkpoint_data: CheckpointData::new(&CHECKPOINTS)?,
        chain_tx_data: ChainTxData::default(),
    };

    profile.verify_genesis(GENESIS_HASH, GENESIS_MERKLE_ROOT)?;
    Ok(profile)
}
