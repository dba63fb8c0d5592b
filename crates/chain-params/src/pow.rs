//! # Compact Targets
//!
//! Block headers carry their target in the 32-bit "compact" form: one size
//! byte followed by a 23-bit mantissa and a sign bit.
//!
//! ```text
//!   bits = 0x1f00ffff
//!          ││└──┬─┘
//!          ││   └─ mantissa 0x00ffff
//!          │└───── sign bit (0x00800000)
//!          └────── size = 0x1f bytes
//!   target = mantissa * 256^(size - 3)
//! ```

use shared_types::U256;

/// A decoded compact target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactTarget {
    pub target: U256,
    /// The sign bit was set on a non-zero mantissa.
    pub negative: bool,
    /// The value does not fit in 256 bits.
    pub overflow: bool,
}

/// Decode compact `bits` into a target.
#[must_use]
pub fn target_from_compact(bits: u32) -> CompactTarget {
    let size = bits >> 24;
    let mut word = bits & 0x007f_ffff;

    let target = if size <= 3 {
        word >>= 8 * (3 - size);
        U256::from(word)
    } else {
        U256::from(word) << (8 * (size - 3))
    };

    let negative = word != 0 && (bits & 0x0080_0000) != 0;
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

    CompactTarget {
        target,
        negative,
        overflow,
    }
}

/// Encode `target` in compact form.
#[must_use]
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() as u32 + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3))).low_u64() as u32
    };

    // A set sign bit would make the mantissa negative; move it into the size.
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | (size << 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::u256_from_hex;

    #[test]
    fn test_decode_genesis_targets() {
        let main = target_from_compact(0x1f00ffff);
        assert!(!main.negative && !main.overflow);
        assert_eq!(
            main.target,
            u256_from_hex("0000ffff00000000000000000000000000000000000000000000000000000000")
        );

        let regtest = target_from_compact(0x207fffff);
        assert_eq!(
            regtest.target,
            u256_from_hex("7fffff0000000000000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn test_roundtrip_known_values() {
        for bits in [0x1f00ffffu32, 0x207fffff, 0x1d00ffff, 0x1b0404cb] {
            assert_eq!(target_to_compact(target_from_compact(bits).target), bits);
        }
    }

    #[test]
    fn test_small_sizes() {
        assert_eq!(target_from_compact(0x01123456).target, U256::from(0x12u32));
        assert_eq!(target_from_compact(0x02123456).target, U256::from(0x1234u32));
        assert_eq!(target_from_compact(0x03123456).target, U256::from(0x123456u32));
        assert_eq!(target_to_compact(U256::from(0x12u32)), 0x01120000);
        assert_eq!(target_to_compact(U256::zero()), 0);
    }

    #[test]
    fn test_negative_flag() {
        let decoded = target_from_compact(0x04923456);
        assert!(decoded.negative);
        assert!(!decoded.overflow);

        // Sign bit with a zero mantissa is not negative.
        assert!(!target_from_compact(0x04800000).negative);
    }

    #[test]
    fn test_overflow_flag() {
        assert!(target_from_compact(0xff123456).overflow);
        assert!(target_from_compact(0x23000001).overflow);
        assert!(!target_from_compact(0x22000001).overflow);
    }

    #[test]
    fn test_sign_bit_moves_into_size() {
        // 0x80 in the top mantissa byte would read as negative.
        assert_eq!(target_to_compact(U256::from(0x80u32)), 0x02008000);
    }

    proptest! {
        #[test]
        fn prop_normalized_compact_roundtrips(size in 4u32..=32, mantissa in 0x010000u32..0x800000) {
            let bits = (size << 24) | mantissa;
            let decoded = target_from_compact(bits);
            prop_assert!(!decoded.negative);
            prop_assert_eq!(target_to_compact(decoded.target), bits);
        }
    }
}
