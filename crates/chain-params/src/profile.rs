//! # Network Profiles
//!
//! Everything that distinguishes one network from another: consensus rules,
//! genesis block, wire magic, ports, seeds, address prefixes and checkpoints.
//!
//! A profile is built once per process by [`NetworkProfile::build`] and then
//! shared read-only as `Arc<NetworkProfile>`. The only mutation is the
//! deployment-window override used by test tooling.

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::{Block, Hash256, U256};
use tracing::debug;

use crate::checkpoints::{ChainTxData, CheckpointData};
use crate::consensus::{ConsensusParams, DeploymentPos};
use crate::errors::{ChainParamsError, GenesisField};
use crate::network::Network;
use crate::networks;
use crate::seeds::SeedSpec6;

/// Four bytes prefixed to every P2P message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageStart(pub [u8; 4]);

impl fmt::Display for MessageStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Kinds of base58-encoded payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

/// Version prefixes for base58 payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    /// Prefix bytes for `kind`.
    #[must_use]
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

/// Full parameter set of one network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkProfile {
    pub network: Network,
    pub consensus: ConsensusParams,
    pub genesis: Block,
    pub message_start: MessageStart,
    pub default_port: u16,
    pub prune_after_height: u64,
    pub dns_seeds: Vec<String>,
    pub fixed_seeds: Vec<SeedSpec6>,
    pub base58_prefixes: Base58Prefixes,
    pub bech32_hrp: String,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub checkpoint_data: CheckpointData,
    pub chain_tx_data: ChainTxData,
}

impl NetworkProfile {
    /// Build and verify the profile for `network`.
    pub fn build(network: Network) -> Result<Self, ChainParamsError> {
        networks::build(network)
    }

    /// Network identifier.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.network.as_str()
    }

    #[must_use]
    pub fn genesis_hash(&self) -> Hash256 {
        self.consensus.hash_genesis_block
    }

    #[must_use]
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// Compare the constructed genesis block against pinned values.
    pub fn verify_genesis(
        &self,
        expected_hash: Hash256,
        expected_merkle_root: Hash256,
    ) -> Result<(), ChainParamsError> {
        let actual = self.genesis.block_hash();
        if actual != expected_hash || self.consensus.hash_genesis_block != actual {
            return Err(ChainParamsError::GenesisMismatch {
                network: self.network,
                field: GenesisField::BlockHash,
                expected: expected_hash,
                actual,
            });
        }

        let actual = self.genesis.header.merkle_root;
        if actual != expected_merkle_root || !self.genesis.check_merkle_root() {
            return Err(ChainParamsError::GenesisMismatch {
                network: self.network,
                field: GenesisField::MerkleRoot,
                expected: expected_merkle_root,
                actual,
            });
        }

        Ok(())
    }

    /// Replace the signalling window of one deployment.
    pub(crate) fn update_version_bits_parameters(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) {
        let deployment = &mut self.consensus.deployments[pos.index()];
        debug!(
            "[chain-params] {} deployment {}: window [{}, {}) -> [{}, {})",
            self.network, pos, deployment.start_time, deployment.timeout, start_time, timeout
        );
        deployment.start_time = start_time;
        deployment.timeout = timeout;
    }

    /// Serializable overview for operator output.
    #[must_use]
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            network: self.network,
            genesis_hash: self.genesis_hash(),
            merkle_root: self.genesis.header.merkle_root,
            message_start: self.message_start.to_string(),
            default_port: self.default_port,
            bech32_hrp: self.bech32_hrp.clone(),
            pow_limit: self.consensus.pow_limit,
            pos_limit: self.consensus.pos_limit,
            subsidy_halving_interval: self.consensus.subsidy_halving_interval,
            last_pow_block: self.consensus.last_pow_block,
            first_mpos_block: self.consensus.first_mpos_block,
            last_checkpoint_height: self.checkpoint_data.last_checkpoint_height(),
            dns_seeds: self.dns_seeds.clone(),
            deployments: DeploymentPos::ALL
                .iter()
                .map(|&pos| {
                    let d = self.consensus.deployment(pos);
                    DeploymentSummary {
                        name: pos.name(),
                        bit: d.bit,
                        start_time: d.start_time,
                        timeout: d.timeout,
                    }
                })
                .collect(),
        }
    }
}

/// Reported form of a [`NetworkProfile`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub network: Network,
    pub genesis_hash: Hash256,
    pub merkle_root: Hash256,
    pub message_start: String,
    pub default_port: u16,
    pub bech32_hrp: String,
    pub pow_limit: U256,
    pub pos_limit: U256,
    pub subsidy_halving_interval: u32,
    pub last_pow_block: i32,
    pub first_mpos_block: i32,
    pub last_checkpoint_height: i32,
    pub dns_seeds: Vec<String>,
    pub deployments: Vec<DeploymentSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentSummary {
    pub name: &'static str,
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
}
