//! Network identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The network to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network.
    Main,
    /// Public test network.
    Test,
    /// Local regression test network.
    Regtest,
    /// Regtest with maturity-scaled activation parameters for unit tests.
    UnitTest,
}

impl Network {
    /// Every supported network.
    pub const ALL: [Network; 4] = [Self::Main, Self::Test, Self::Regtest, Self::UnitTest];

    /// The identifier used to select this network.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
            Self::Regtest => "regtest",
            Self::UnitTest => "unittest",
        }
    }

    /// True only for the production network.
    pub fn is_mainnet(self) -> bool {
        self == Self::Main
    }
}

/// An unrecognised network identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown network: {0}")]
pub struct ParseNetworkError(pub String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "test" => Ok(Self::Test),
            "regtest" => Ok(Self::Regtest),
            "unittest" => Ok(Self::UnitTest),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
