//! # Node Configuration
//!
//! Runtime configuration with defaults, overridden from the environment.
//!
//! | Variable           | Field                 | Default  |
//! |--------------------|-----------------------|----------|
//! | `ABP_NETWORK`      | `chain.network`       | `main`   |
//! | `ABP_PRINT_PARAMS` | `chain.print_params`  | `false`  |
//! | `ABP_LOG`          | `logging.filter`      | `info`   |

use chain_params::Network;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the network.
pub const ENV_NETWORK: &str = "ABP_NETWORK";
/// Environment variable enabling the parameter report.
pub const ENV_PRINT_PARAMS: &str = "ABP_PRINT_PARAMS";
/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "ABP_LOG";

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Chain selection.
    pub chain: ChainConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

impl NodeConfig {
    /// Defaults overridden from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(network) = lookup(ENV_NETWORK) {
            config.chain.network = network.trim().to_string();
        }
        if let Some(flag) = lookup(ENV_PRINT_PARAMS) {
            config.chain.print_params = parse_flag(ENV_PRINT_PARAMS, &flag)?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.logging.filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the node cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chain
            .network
            .parse::<Network>()
            .map_err(|_| ConfigError::UnknownNetwork(self.chain.network.clone()))?;

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }
}

/// Chain selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Network identifier: `main`, `test`, `regtest` or `unittest`.
    pub network: String,
    /// Emit the selected profile as JSON after startup.
    pub print_params: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            network: Network::Main.as_str().to_string(),
            print_params: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown network '{0}': expected one of main, test, regtest, unittest")]
    UnknownNetwork(String),

    #[error("{var} must be a boolean (1/0, true/false, yes/no), got '{value}'")]
    InvalidFlag { var: &'static str, value: String },

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NodeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, NodeConfig::default());
        assert_eq!(config.chain.network, "main");
        assert!(!config.chain.print_params);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_env_overrides() {
        let config = NodeConfig::from_lookup(lookup_from(&[
            (ENV_NETWORK, " regtest "),
            (ENV_PRINT_PARAMS, "TRUE"),
            (ENV_LOG, "chain_params=debug"),
        ]))
        .unwrap();
        assert_eq!(config.chain.network, "regtest");
        assert!(config.chain.print_params);
        assert_eq!(config.logging.filter, "chain_params=debug");
    }

    #[test]
    fn test_unknown_network_rejected() {
        let err = NodeConfig::from_lookup(lookup_from(&[(ENV_NETWORK, "mainnet")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownNetwork("mainnet".into()));
    }

    #[test]
    fn test_bad_flag_rejected() {
        let err =
            NodeConfig::from_lookup(lookup_from(&[(ENV_PRINT_PARAMS, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { var: ENV_PRINT_PARAMS, .. }));
    }

    #[test]
    fn test_empty_log_filter_rejected() {
        let mut config = NodeConfig::default();
        config.logging.filter = "  ".into();
        assert_eq!(config.validate(), Err(ConfigError::EmptyLogFilter));
    }
}
