//! # chain-params
//!
//! Consensus parameters and network identity for every supported network.
//!
//! ## Architecture
//!
//! ```text
//! genesis::create_genesis_block ──→ networks::{mainnet, testnet, regtest}
//!                                          │            └──→ unittest (regtest + overrides)
//!                                          ↓
//!                           NetworkProfile (genesis verified)
//!                                          │
//!                                          ↓
//!                                   ParamsRegistry
//! ```
//!
//! Each network builder assigns its parameters literally, builds the genesis
//! block and compares the block hash and merkle root against hard-coded
//! values. A mismatch is [`ChainParamsError::GenesisMismatch`], which the
//! runtime treats as fatal: a node must never start on a genesis block that
//! its peers do not share.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chain_params::ParamsRegistry;
//!
//! let registry = ParamsRegistry::new();
//! registry.select_network("main")?;
//!
//! let profile = registry.current();
//! assert_eq!(profile.default_port, 9981);
//! ```

pub mod checkpoints;
pub mod consensus;
pub mod errors;
pub mod genesis;
pub mod network;
pub mod networks;
pub mod pow;
pub mod profile;
pub mod registry;
pub mod seeds;

// Re-export main types
pub use checkpoints::{ChainTxData, Checkpoint, CheckpointData};
pub use consensus::{
    Bip9Deployment, BuriedDeployment, ConsensusParams, DeploymentPos, HeightActivations,
    ProofKind, COINBASE_MATURITY,
};
pub use errors::{ChainParamsError, GenesisField};
pub use genesis::{create_default_genesis_block, create_genesis_block};
pub use network::{Network, ParseNetworkError};
pub use profile::{Base58Prefixes, Base58Type, MessageStart, NetworkProfile, ProfileSummary};
pub use registry::{params, select_params, update_version_bits_parameters, ParamsRegistry};
pub use seeds::SeedSpec6;
