//! # Node Container
//!
//! Owns the configuration and the parameter registry for the lifetime of the
//! node. Everything downstream reads chain parameters through the registry
//! held here.
//!
//! ## Startup
//!
//! 1. Resolve `chain.network` to a [`Network`]
//! 2. Build its profile and verify the genesis block
//! 3. Install the profile in the registry

pub mod config;

pub use config::{ChainConfig, ConfigError, LoggingConfig, NodeConfig};

use std::sync::Arc;

use chain_params::{ChainParamsError, Network, NetworkProfile, ParamsRegistry};
use tracing::{error, info};

/// Node-wide state.
#[derive(Debug)]
pub struct NodeContainer {
    /// Configuration the node was started with.
    pub config: NodeConfig,
    registry: Arc<ParamsRegistry>,
}

impl NodeContainer {
    /// Container with a fresh registry.
    pub fn new(config: NodeConfig) -> Self {
        Self::with_registry(config, Arc::new(ParamsRegistry::new()))
    }

    /// Container around an existing registry.
    pub fn with_registry(config: NodeConfig, registry: Arc<ParamsRegistry>) -> Self {
        Self { config, registry }
    }

    pub fn registry(&self) -> &Arc<ParamsRegistry> {
        &self.registry
    }

    /// Select the configured network.
    ///
    /// Returns the installed profile. Genesis verification failures are
    /// logged and returned; callers must not continue past them.
    pub fn start(&self) -> Result<Arc<NetworkProfile>, ChainParamsError> {
        let network: Network = self.config.chain.network.parse()?;
        info!("Selecting chain parameters for {}", network);

        match self.registry.select(network) {
            Ok(profile) => {
                info!(
                    "Chain parameters ready: network={} port={} genesis={}",
                    profile.id(),
                    profile.default_port,
                    profile.genesis_hash()
                );
                Ok(profile)
            }
            Err(e) => {
                if e.is_fatal() {
                    error!("Refusing to start: {}", e);
                }
                Err(e)
            }
        }
    }

    /// The active profile.
    ///
    /// # Panics
    ///
    /// If [`NodeContainer::start`] has not succeeded.
    pub fn params(&self) -> Arc<NetworkProfile> {
        self.registry.current()
    }
}
