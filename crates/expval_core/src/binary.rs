//! Bit-level primitives
//!
//! Gantree: L0_Foundation → Binary
//!
//! Outcomes are little-endian: bit 0 is the first classical bit.

use crate::constants::register::OUTCOME_BITS;
use crate::types::Outcome;

/// Retrieve a single binary digit of `value` (LSB = place 0)
/// Gantree: bit_at(value,place) -> bool // 단일 비트
///
/// Places beyond the outcome width read as `false`.
#[inline]
pub fn bit_at(value: Outcome, place: usize) -> bool {
    place < OUTCOME_BITS && (value >> place) & 1 == 1
}

/// Parity bit of an integer: popcount mod 2
/// Gantree: parity(integer) -> u8 // 홀짝
#[inline]
pub fn parity(integer: Outcome) -> u8 {
    (integer.count_ones() % 2) as u8
}

/// Sign contributed by an outcome: `(-1)^parity`
#[inline]
pub fn parity_sign(integer: Outcome) -> i8 {
    if parity(integer) == 0 {
        1
    } else {
        -1
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bit_at() {
        assert!(!bit_at(0b100, 0));
        assert!(!bit_at(0b100, 1));
        assert!(bit_at(0b100, 2));
        assert!(!bit_at(0b100, 3));
        assert!(bit_at(u64::MAX, 63));
        assert!(!bit_at(u64::MAX, 64));
    }

    #[test]
    fn test_parity_zero() {
        assert_eq!(parity(0), 0);
        assert_eq!(parity_sign(0), 1);
    }

    #[test]
    fn test_parity_small() {
        assert_eq!(parity(0b1), 1);
        assert_eq!(parity(0b11), 0);
        assert_eq!(parity(0b111), 1);
        assert_eq!(parity(0b1010_0001), 1);
        assert_eq!(parity_sign(0b111), -1);
    }

    #[test]
    fn test_parity_matches_popcount() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..256 {
            let n: u64 = rng.gen();
            let popcount = (0..64).filter(|&i| bit_at(n, i)).count();
            assert_eq!(parity(n) as usize, popcount % 2);
        }
    }
}
