//! Regtest with activation parameters scaled for a 500-block coinbase maturity.

use crate::errors::ChainParamsError;
use crate::network::Network;
use crate::profile::NetworkProfile;

pub(super) fn build() -> Result<NetworkProfile, ChainParamsError> {
    let mut profile = super::regtest::build()?;
    profile.network = Network::UnitTest;

    let c = &mut profile.consensus;
    c.height_activations.bip16_height = 0;
    c.height_activations.bip34_height = 100_000_000;
    c.height_activations.bip65_height = 1351;
    c.height_activations.bip66_height = 1251;
    c.subsidy_halving_interval = 750;
    c.rule_change_activation_threshold = 558;
    c.miner_confirmation_window = 744;

    Ok(profile)
}
