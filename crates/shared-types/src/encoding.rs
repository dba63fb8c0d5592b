//! # Consensus Encoding
//!
//! Byte-exact serialization used for hashing and relay.
//!
//! - Integers are little-endian at their declared width.
//! - Variable-length fields are prefixed with a CompactSize count.
//! - 256-bit hashes are written in internal byte order.
//!
//! Encoding into a `Vec<u8>` cannot fail, so the trait has no error type.

/// A type with a canonical wire encoding.
pub trait Encodable {
    /// Append the encoding of `self` to `out`.
    fn consensus_encode(&self, out: &mut Vec<u8>);
}

/// Encode a value into a fresh buffer.
pub fn serialize<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    let mut out = Vec::new();
    value.consensus_encode(&mut out);
    out
}

/// Append a CompactSize length prefix.
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Append length-prefixed bytes.
pub fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

macro_rules! impl_int_encodable {
    ($($ty:ty),*) => {
        $(
            impl Encodable for $ty {
                fn consensus_encode(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_int_encodable!(u8, u16, u32, u64, i32, i64);

impl Encodable for [u8; 32] {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        write_compact_size(out, self.len() as u64);
        for item in self {
            item.consensus_encode(out);
        }
    }
}
