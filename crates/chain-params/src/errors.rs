//! Error types for chain parameter construction and selection.

use std::fmt;

use shared_types::Hash256;
use thiserror::Error;

use crate::consensus::DeploymentPos;
use crate::network::{Network, ParseNetworkError};

/// Which genesis commitment failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisField {
    /// Header hash.
    BlockHash,
    /// Merkle root of the coinbase.
    MerkleRoot,
}

impl fmt::Display for GenesisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockHash => f.write_str("block hash"),
            Self::MerkleRoot => f.write_str("merkle root"),
        }
    }
}

/// Chain parameter errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainParamsError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Genesis {field} mismatch on {network}: expected {expected}, got {actual}")]
    GenesisMismatch {
        network: Network,
        field: GenesisField,
        expected: Hash256,
        actual: Hash256,
    },

    #[error("Deployment {deployment} uses bit {bit}, highest signalling bit is 28")]
    InvalidDeploymentBit { deployment: DeploymentPos, bit: u8 },

    #[error("Deployment {deployment} window is empty: start {start_time} >= timeout {timeout}")]
    EmptyDeploymentWindow {
        deployment: DeploymentPos,
        start_time: i64,
        timeout: i64,
    },

    #[error("Deployments {first} and {second} both signal on bit {bit} in overlapping windows")]
    DeploymentBitCollision {
        first: DeploymentPos,
        second: DeploymentPos,
        bit: u8,
    },

    #[error("Checkpoint at height {height} does not follow height {previous}")]
    UnorderedCheckpoints { previous: i32, height: i32 },

    #[error("Checkpoint mismatch at height {height}: expected {expected}, got {actual}")]
    CheckpointMismatch {
        height: i32,
        expected: Hash256,
        actual: Hash256,
    },
}

impl ChainParamsError {
    /// True if the process must not continue with these parameters.
    ///
    /// Only a bad network name (configuration input) and a checkpoint
    /// mismatch (a rejected candidate chain) are recoverable; everything
    /// else means the hard-coded tables are internally inconsistent.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::UnknownNetwork(_) | Self::CheckpointMismatch { .. }
        )
    }
}

impl From<ParseNetworkError> for ChainParamsError {
    fn from(err: ParseNetworkError) -> Self {
        Self::UnknownNetwork(err.0)
    }
}
