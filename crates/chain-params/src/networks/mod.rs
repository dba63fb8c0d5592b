//! # Network Builders
//!
//! One module per network. Each assigns every parameter literally, builds
//! the genesis block and verifies it against the pinned hashes before the
//! profile is handed out.
//!
//! `unittest` is not a separate table: it is the regtest profile with a few
//! activation parameters scaled to the coinbase maturity.

mod mainnet;
mod regtest;
mod testnet;
mod unittest;

use tracing::debug;

use crate::errors::ChainParamsError;
use crate::network::Network;
use crate::profile::NetworkProfile;

/// Build and verify the profile for `network`.
pub fn build(network: Network) -> Result<NetworkProfile, ChainParamsError> {
    let profile = match network {
        Network::Main => mainnet::build()?,
        Network::Test => testnet::build()?,
        Network::Regtest => regtest::build()?,
        Network::UnitTest => unittest::build()?,
    };
    profile.consensus.check_deployments()?;

    debug!(
        "[chain-params] built {} profile, genesis {}",
        profile.id(),
        profile.genesis_hash()
    );
    Ok(profile)
}

/// Build the profile for a network identifier.
pub fn build_by_id(id: &str) -> Result<NetworkProfile, ChainParamsError> {
    build(id.parse::<Network>()?)
}
