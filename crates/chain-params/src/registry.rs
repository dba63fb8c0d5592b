//! # Parameter Registry
//!
//! Holds the profile of the network the process runs on.
//!
//! ```text
//!   Unselected ──select_network(id)──→ Selected(profile)
//!                                          │   ↑
//!                                          └───┘ select_network / override
//! ```
//!
//! Readers receive an `Arc<NetworkProfile>` snapshot. Re-selection and the
//! deployment-window override install a new `Arc`; snapshots already handed
//! out keep their values.
//!
//! Components take a `&ParamsRegistry` (or `Arc<ParamsRegistry>`). The
//! process-wide instance behind [`global`] exists for code that cannot be
//! handed one.

use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::consensus::DeploymentPos;
use crate::errors::ChainParamsError;
use crate::network::Network;
use crate::profile::NetworkProfile;

const UNSELECTED: &str = "chain parameters read before a network was selected";

/// Slot for the active network profile.
#[derive(Debug, Default)]
pub struct ParamsRegistry {
    active: RwLock<Option<Arc<NetworkProfile>>>,
}

impl ParamsRegistry {
    /// Registry with no network selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `network` already selected.
    pub fn with_network(network: Network) -> Result<Self, ChainParamsError> {
        let registry = Self::new();
        registry.select(network)?;
        Ok(registry)
    }

    /// Build the profile for identifier `id` and make it active.
    ///
    /// On an unknown identifier the previous selection stays in place.
    pub fn select_network(&self, id: &str) -> Result<Arc<NetworkProfile>, ChainParamsError> {
        match id.parse::<Network>() {
            Ok(network) => self.select(network),
            Err(e) => {
                warn!("[chain-params] rejected network selection: {}", e);
                Err(e.into())
            }
        }
    }

    /// Build the profile for `network` and make it active.
    pub fn select(&self, network: Network) -> Result<Arc<NetworkProfile>, ChainParamsError> {
        let profile = Arc::new(NetworkProfile::build(network)?);

        let previous = self.active.write().replace(Arc::clone(&profile));
        match previous {
            Some(old) if old.network != network => info!(
                "[chain-params] switched network {} -> {} (genesis {})",
                old.network,
                network,
                profile.genesis_hash()
            ),
            _ => info!(
                "[chain-params] selected network {} (genesis {})",
                network,
                profile.genesis_hash()
            ),
        }

        Ok(profile)
    }

    /// The active profile.
    ///
    /// # Panics
    ///
    /// If no network has been selected.
    #[must_use]
    pub fn current(&self) -> Arc<NetworkProfile> {
        match self.try_current() {
            Some(profile) => profile,
            None => panic!("{}", UNSELECTED),
        }
    }

    /// The active profile, if any.
    #[must_use]
    pub fn try_current(&self) -> Option<Arc<NetworkProfile>> {
        self.active.read().clone()
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.active.read().is_some()
    }

    /// Replace the signalling window of one deployment on the active profile.
    ///
    /// # Panics
    ///
    /// If no network has been selected.
    pub fn override_deployment_window(&self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        let mut guard = self.active.write();
        let Some(active) = guard.as_mut() else {
            panic!("{}", UNSELECTED);
        };

        // Copy-on-write: outstanding snapshots keep the old window.
        Arc::make_mut(active).update_version_bits_parameters(pos, start_time, timeout);
        debug!(
            "[chain-params] overrode {} window to [{}, {})",
            pos, start_time, timeout
        );
    }
}

lazy_static! {
    static ref GLOBAL: ParamsRegistry = ParamsRegistry::new();
}

/// The process-wide registry.
pub fn global() -> &'static ParamsRegistry {
    &GLOBAL
}

/// Select the process-wide network by identifier.
pub fn select_params(id: &str) -> Result<Arc<NetworkProfile>, ChainParamsError> {
    global().select_network(id)
}

/// The process-wide active profile.
///
/// # Panics
///
/// If [`select_params`] has not succeeded yet.
#[must_use]
pub fn params() -> Arc<NetworkProfile> {
    global().current()
}

/// Override a deployment window on the process-wide profile.
///
/// # Panics
///
/// If [`select_params`] has not succeeded yet.
pub fn update_version_bits_parameters(pos: DeploymentPos, start_time: i64, timeout: i64) {
    global().override_deployment_window(pos, start_time, timeout);
}
