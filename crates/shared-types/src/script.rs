//! # Scripts
//!
//! Just enough of the script language to build coinbase inputs and
//! pay-to-pubkey outputs. Scripts are never executed here.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encoding::{write_var_bytes, Encodable};

/// Opcodes used when building scripts.
pub mod opcodes {
    /// Push an empty byte vector.
    pub const OP_0: u8 = 0x00;
    /// Next byte is the push length.
    pub const OP_PUSHDATA1: u8 = 0x4c;
    /// Next two bytes are the push length.
    pub const OP_PUSHDATA2: u8 = 0x4d;
    /// Next four bytes are the push length.
    pub const OP_PUSHDATA4: u8 = 0x4e;
    /// Push the number -1.
    pub const OP_1NEGATE: u8 = 0x4f;
    /// Push the number 1. `OP_2`..`OP_16` follow consecutively.
    pub const OP_1: u8 = 0x51;
    /// Check a signature against the pubkey on the stack.
    pub const OP_CHECKSIG: u8 = 0xac;
}

use opcodes::*;

/// Raw script bytes with a by-value builder API.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    /// Empty script.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wrap existing script bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the script has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a bare opcode.
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Append a minimal data push.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Append an integer.
    ///
    /// `0`, `-1` and `1..=16` use their dedicated opcodes; anything else is
    /// pushed as a script number.
    pub fn push_int(self, value: i64) -> Self {
        match value {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (value as u8 - 1)),
            _ => self.push_slice(&scriptnum_encode(value)),
        }
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
pub fn scriptnum_encode(value: i64) -> Vec<u8> {
    let mut out = Vec::new();
    if value == 0 {
        return out;
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit carries the sign; add a byte if the magnitude already uses it.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

impl Encodable for Script {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        write_var_bytes(out, &self.0);
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
