//! # Checkpoints
//!
//! Hard-coded `(height, hash)` anchors. A candidate chain whose block at a
//! checkpointed height has a different hash is rejected outright, no matter
//! how much work it carries.
//!
//! `ChainTxData` is unrelated to validation; it only feeds the sync progress
//! estimate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_types::Hash256;

use crate::errors::ChainParamsError;

/// A single anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub height: i32,
    pub hash: Hash256,
}

/// Checkpoints of one network, keyed by height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckpointData {
    checkpoints: BTreeMap<i32, Hash256>,
}

impl CheckpointData {
    /// Build from entries listed in strictly increasing height order.
    pub fn new(entries: &[(i32, Hash256)]) -> Result<Self, ChainParamsError> {
        let mut checkpoints = BTreeMap::new();
        let mut previous: Option<i32> = None;

        for &(height, hash) in entries {
            if let Some(prev) = previous {
                if height <= prev {
                    return Err(ChainParamsError::UnorderedCheckpoints {
                        previous: prev,
                        height,
                    });
                }
            }
            checkpoints.insert(height, hash);
            previous = Some(height);
        }

        Ok(Self { checkpoints })
    }

    /// Hash anchored at `height`, if any.
    #[must_use]
    pub fn get(&self, height: i32) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// Anchors in height order.
    pub fn iter(&self) -> impl Iterator<Item = Checkpoint> + '_ {
        self.checkpoints
            .iter()
            .map(|(&height, &hash)| Checkpoint { height, hash })
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Height of the last anchor, or `0` when there are none.
    #[must_use]
    pub fn last_checkpoint_height(&self) -> i32 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    /// Check a block against the anchor at its height.
    ///
    /// Heights without an anchor always pass.
    pub fn check(&self, height: i32, hash: &Hash256) -> Result<(), ChainParamsError> {
        match self.checkpoints.get(&height) {
            Some(expected) if expected != hash => Err(ChainParamsError::CheckpointMismatch {
                height,
                expected: *expected,
                actual: *hash,
            }),
            _ => Ok(()),
        }
    }
}

/// Transaction statistics at a known point of the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainTxData {
    /// Unix time of the reference block.
    pub time: i64,
    /// Transactions from genesis up to the reference block.
    pub tx_count: i64,
    /// Estimated transactions per second after the reference block.
    pub tx_rate: f64,
}

impl ChainTxData {
    /// Estimate the fraction of all transactions a node at `tip` has
    /// verified, given the current time `now`. Always in `[0, 1]`.
    #[must_use]
    pub fn guess_verification_progress(&self, tip_time: i64, tip_tx_count: i64, now: i64) -> f64 {
        if tip_tx_count <= 0 {
            return 0.0;
        }

        let tx_total = if tip_tx_count <= self.tx_count {
            self.tx_count as f64 + (now - self.time) as f64 * self.tx_rate
        } else {
            tip_tx_count as f64 + (now - tip_time) as f64 * self.tx_rate
        };

        if tx_total <= 0.0 {
            return 1.0;
        }
        (tip_tx_count as f64 / tx_total).clamp(0.0, 1.0)
    }
}
