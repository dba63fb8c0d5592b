//! # Error Types
//!
//! Errors raised when parsing runtime-supplied values into shared types.

use thiserror::Error;

/// Errors from parsing a 256-bit value written in hex.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexError {
    /// No hex digits after the optional `0x` prefix.
    #[error("Empty hex string")]
    Empty,

    /// More digits than fit in 256 bits.
    #[error("Hex string too long: {digits} digits, at most 64")]
    TooLong { digits: usize },

    /// Non-hex character.
    #[error("Invalid hex: {0}")]
    Invalid(#[from] hex::FromHexError),
}
