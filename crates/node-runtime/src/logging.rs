//! Logging setup.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::container::LoggingConfig;

/// Build the log filter from configuration.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.filter)
        .with_context(|| format!("Invalid log filter '{}'", config.filter))
}

/// Install the global `tracing` subscriber.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter(config)?)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filters() {
        for filter in ["info", "chain_params=debug,warn", "trace"] {
            let config = LoggingConfig {
                filter: filter.to_string(),
            };
            assert!(env_filter(&config).is_ok(), "{filter}");
        }
    }

    #[test]
    fn test_invalid_filter() {
        let config = LoggingConfig {
            filter: "chain_params=notalevel".to_string(),
        };
        assert!(env_filter(&config).is_err());
    }
}
