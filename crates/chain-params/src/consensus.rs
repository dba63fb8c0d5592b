//! # Consensus Parameters
//!
//! The immutable rule set a node validates blocks against: subsidy schedule,
//! proof limits, retargeting toggles, soft-fork activation heights and the
//! version-bits deployment table.
//!
//! ## Proof Schedule
//!
//! ```text
//! height:  0 ────────── last_pow_block ─────────── first_mpos_block ──────→
//!          │  PoW (and PoS) │        PoS only        │   PoS + MPoS rewards
//! ```
//!
//! `first_mpos_block` is derived as
//! `last_pow_block + mpos_reward_recipients + COINBASE_MATURITY` on networks
//! with a finite PoW phase.

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::{Hash256, U256};

use crate::errors::ChainParamsError;
use crate::pow::target_from_compact;

/// Blocks a coinbase output must wait before it can be spent.
pub const COINBASE_MATURITY: i32 = 500;

/// Timeout meaning "never expires".
pub const NO_TIMEOUT: i64 = 999_999_999_999;

/// Highest version bit a deployment may signal on.
pub const MAX_DEPLOYMENT_BIT: u8 = 28;

/// Number of version-bits deployments.
pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 3;

// =============================================================================
// BURIED DEPLOYMENTS
// =============================================================================

/// Soft forks activated by height rather than by signalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuriedDeployment {
    /// Pay-to-script-hash.
    Bip16,
    /// Height in coinbase.
    Bip34,
    /// OP_CHECKLOCKTIMEVERIFY.
    Bip65,
    /// Strict DER signatures.
    Bip66,
}

/// Activation heights of the buried deployments. `0` means active from genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightActivations {
    pub bip16_height: i32,
    pub bip34_height: i32,
    /// Block hash at `bip34_height`.
    pub bip34_hash: Hash256,
    pub bip65_height: i32,
    pub bip66_height: i32,
}

impl HeightActivations {
    /// Activation height of `fork`.
    #[must_use]
    pub fn height(&self, fork: BuriedDeployment) -> i32 {
        match fork {
            BuriedDeployment::Bip16 => self.bip16_height,
            BuriedDeployment::Bip34 => self.bip34_height,
            BuriedDeployment::Bip65 => self.bip65_height,
            BuriedDeployment::Bip66 => self.bip66_height,
        }
    }

    /// True if `fork` is enforced for a block at `height`.
    #[must_use]
    pub fn is_active(&self, fork: BuriedDeployment, height: i32) -> bool {
        height >= self.height(fork)
    }
}

// =============================================================================
// VERSION BITS DEPLOYMENTS
// =============================================================================

/// Index into the deployment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeploymentPos {
    /// Exercises the signalling machinery; activates nothing.
    TestDummy = 0,
    /// BIP68, BIP112 and BIP113.
    Csv = 1,
    /// BIP141, BIP143 and BIP147.
    Segwit = 2,
}

impl DeploymentPos {
    /// All positions in table order.
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] =
        [Self::TestDummy, Self::Csv, Self::Segwit];

    /// Deployment name as used in RPC output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TestDummy => "testdummy",
            Self::Csv => "csv",
            Self::Segwit => "segwit",
        }
    }

    /// Position in the deployment table.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DeploymentPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A BIP9 deployment: the version bit and the `[start_time, timeout)` window
/// in which miners may signal for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bip9Deployment {
    pub bit: u8,
    /// Median time past at which signalling starts (unix seconds).
    pub start_time: i64,
    /// Median time past at which an unsuccessful deployment fails.
    pub timeout: i64,
}

impl Bip9Deployment {
    /// Deployment signalling on `bit` for `[start_time, timeout)`.
    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        Self {
            bit,
            start_time,
            timeout,
        }
    }

    /// True if `time` falls inside the signalling window.
    #[must_use]
    pub fn is_active_at(&self, time: i64) -> bool {
        self.start_time <= time && time < self.timeout
    }

    /// True if both signalling windows share at least one instant.
    #[must_use]
    pub fn overlaps(&self, other: &Bip9Deployment) -> bool {
        self.start_time < other.timeout && other.start_time < self.timeout
    }

    /// Version field mask for this deployment's bit.
    #[must_use]
    pub fn version_mask(&self) -> u32 {
        1u32 << self.bit
    }
}

// =============================================================================
// CONSENSUS PARAMETERS
// =============================================================================

/// Which proof a block carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofKind {
    Work,
    Stake,
}

/// Consensus rules of one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash256,
    pub subsidy_halving_interval: u32,
    pub height_activations: HeightActivations,
    /// Easiest proof-of-work target.
    pub pow_limit: U256,
    /// Easiest proof-of-stake target.
    pub pos_limit: U256,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub pos_no_retargeting: bool,
    /// Seconds.
    pub pow_target_spacing: i64,
    /// Seconds.
    pub pow_target_timespan: i64,
    /// Signalling blocks per window needed to lock a deployment in.
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: [Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS],
    /// The best chain must have at least this much work.
    pub minimum_chain_work: U256,
    /// Signatures in ancestors of this block are assumed valid.
    pub default_assume_valid: Hash256,
    /// Last height at which proof-of-work blocks are accepted.
    pub last_pow_block: i32,
    pub mpos_reward_recipients: i32,
    pub first_mpos_block: i32,
    pub fix_utxo_cache_hf_height: i32,
}

impl ConsensusParams {
    /// The deployment at `pos`.
    #[must_use]
    pub fn deployment(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.deployments[pos.index()]
    }

    /// Blocks between difficulty retargets.
    #[must_use]
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// True if a proof-of-work block is acceptable at `height`.
    #[must_use]
    pub fn is_pow_height(&self, height: i32) -> bool {
        height <= self.last_pow_block
    }

    /// True if block rewards at `height` are split among MPoS recipients.
    #[must_use]
    pub fn is_mpos_height(&self, height: i32) -> bool {
        height >= self.first_mpos_block
    }

    /// `last_pow_block + mpos_reward_recipients + COINBASE_MATURITY`.
    #[must_use]
    pub fn derive_first_mpos_block(last_pow_block: i32, mpos_reward_recipients: i32) -> i32 {
        last_pow_block
            .saturating_add(mpos_reward_recipients)
            .saturating_add(COINBASE_MATURITY)
    }

    /// The easiest target allowed for blocks carrying `proof`.
    #[must_use]
    pub fn limit_for(&self, proof: ProofKind) -> U256 {
        match proof {
            ProofKind::Work => self.pow_limit,
            ProofKind::Stake => self.pos_limit,
        }
    }

    /// True if compact `bits` decode to a positive target no easier than the
    /// limit for `proof`.
    #[must_use]
    pub fn target_within_limit(&self, bits: u32, proof: ProofKind) -> bool {
        let compact = target_from_compact(bits);
        !compact.negative
            && !compact.overflow
            && !compact.target.is_zero()
            && compact.target <= self.limit_for(proof)
    }

    /// Check the deployment table.
    ///
    /// Every bit must be at most [`MAX_DEPLOYMENT_BIT`], every window must be
    /// non-empty, and deployments with overlapping windows must use different
    /// bits.
    pub fn check_deployments(&self) -> Result<(), ChainParamsError> {
        for pos in DeploymentPos::ALL {
            let d = self.deployment(pos);
            if d.bit > MAX_DEPLOYMENT_BIT {
                return Err(ChainParamsError::InvalidDeploymentBit {
                    deployment: pos,
                    bit: d.bit,
                });
            }
            if d.start_time >= d.timeout {
                return Err(ChainParamsError::EmptyDeploymentWindow {
                    deployment: pos,
                    start_time: d.start_time,
                    timeout: d.timeout,
                });
            }
        }

        for (i, first) in DeploymentPos::ALL.iter().enumerate() {
            for second in &DeploymentPos::ALL[i + 1..] {
                let a = self.deployment(*first);
                let b = self.deployment(*second);
                if a.bit == b.bit && a.overlaps(b) {
                    return Err(ChainParamsError::DeploymentBitCollision {
                        first: *first,
                        second: *second,
                        bit: a.bit,
                    });
                }
            }
        }

        Ok(())
    }
}
