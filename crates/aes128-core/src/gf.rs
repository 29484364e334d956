//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
//!
//! Every routine here runs a fixed sequence of operations regardless of the
//! operand values: reductions and conditional additions are applied through
//! masks rather than branches.

/// Low byte of the reduction polynomial `0x11B`.
pub const REDUCTION: u8 = 0x1b;

/// Multiplies `a` by `x` (i.e. `0x02`).
#[inline]
pub const fn xtime(a: u8) -> u8 {
    (a << 1) ^ (((a >> 7) & 1) * REDUCTION)
}

/// Multiplies two field elements.
#[inline]
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        // all ones when the low bit of `b` is set
        let mask = 0u8.wrapping_sub(b & 1);
        product ^= a & mask;
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Returns the multiplicative inverse of `a`, mapping `0` to `0`.
///
/// Computed as `a^254` with a fixed square-and-multiply chain.
pub const fn inverse(a: u8) -> u8 {
    let a2 = mul(a, a);
    let a3 = mul(a2, a);
    let a6 = mul(a3, a3);
    let a12 = mul(a6, a6);
    let a15 = mul(a12, a3);
    let a30 = mul(a15, a15);
    let a60 = mul(a30, a30);
    let a120 = mul(a60, a60);
    let a126 = mul(a120, a6);
    let a127 = mul(a126, a);
    mul(a127, a127)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Branchy reference multiply, as written in FIPS-197 section 4.2.
    fn mul_reference(mut a: u8, mut b: u8) -> u8 {
        let mut product = 0u8;
        for _ in 0..8 {
            if b & 1 != 0 {
                product ^= a;
            }
            let hi_bit_set = a & 0x80;
            a <<= 1;
            if hi_bit_set != 0 {
                a ^= 0x1b;
            }
            b >>= 1;
        }
        product
    }

    #[test]
    fn fips_worked_examples() {
        assert_eq!(mul(0x57, 0x83), 0xc1);
        assert_eq!(mul(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn mul_matches_reference_exhaustively() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(mul(a, b), mul_reference(a, b), "{a:#04x} * {b:#04x}");
            }
        }
    }

    #[test]
    fn mul_by_small_constants() {
        for a in 0..=255u8 {
            assert_eq!(mul(a, 1), a);
            assert_eq!(mul(a, 2), xtime(a));
            assert_eq!(mul(a, 3), xtime(a) ^ a);
        }
    }

    #[test]
    fn inverse_round_trips() {
        assert_eq!(inverse(0), 0);
        assert_eq!(inverse(1), 1);
        for a in 1..=255u8 {
            assert_eq!(mul(a, inverse(a)), 1, "inverse of {a:#04x}");
        }
    }
}
