//! # Abp Chain Node
//!
//! Entry point of the node.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Install logging
//! 3. Select the network and verify its genesis block
//! 4. Report the selected parameters (`ABP_PRINT_PARAMS`)

use anyhow::{Context, Result};
use tracing::info;

use node_runtime::container::{NodeConfig, NodeContainer};
use node_runtime::logging;

fn main() -> Result<()> {
    let config = NodeConfig::from_env().context("Invalid configuration")?;
    logging::init(&config.logging)?;

    info!("===========================================");
    info!("  Abp Chain Node v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let container = NodeContainer::new(config);
    let profile = container
        .start()
        .context("Failed to initialize chain parameters")?;

    info!("Network:      {}", profile.id());
    info!("P2P Port:     {}", profile.default_port);
    info!("Magic:        {}", profile.message_start);
    info!("Genesis:      {}", profile.genesis_hash());
    info!(
        "Checkpoints:  {} (last at height {})",
        profile.checkpoint_data.len(),
        profile.checkpoint_data.last_checkpoint_height()
    );

    if container.config.chain.print_params {
        let summary = serde_json::to_string_pretty(&profile.summary())
            .context("Failed to serialize parameter summary")?;
        println!("{summary}");
    }

    Ok(())
}
