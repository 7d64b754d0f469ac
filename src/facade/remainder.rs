// ============================================================================
// Remainder Family Wrappers
// ============================================================================

use crate::number::Number;
use crate::primitives;

/// Floating-point remainder of `x / y`; the result has the sign of `x`.
///
/// Named `fmod` because `mod` is a keyword. NaN when `y` is zero.
#[inline]
pub fn fmod<T: Number>(x: T, y: T) -> f64 {
    primitives::fmod(x.widen(), y.widen())
}

/// IEEE 754 remainder of `x / y`, with the quotient rounded to even.
#[inline]
pub fn remainder<T: Number>(x: T, y: T) -> f64 {
    primitives::remainder(x.widen(), y.widen())
}

/// Splits `x` into `(integral, fractional)` parts, both with the sign of `x`.
#[inline]
pub fn modf<T: Number>(x: T) -> (f64, f64) {
    primitives::modf(x.widen())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmod_sign_follows_dividend() {
        assert_eq!(fmod(7i32, 3i32), 1.0);
        assert_eq!(fmod(-7i32, 3i32), -1.0);
        assert_eq!(fmod(7i32, -3i32), 1.0);
        assert_eq!(fmod(5.5f64, 2.0), 1.5);
    }

    #[test]
    fn test_fmod_by_zero() {
        assert!(fmod(1i32, 0i32).is_nan());
        assert!(fmod(1u8, 0u8).is_nan());
    }

    #[test]
    fn test_remainder_rounds_quotient_to_even() {
        assert_eq!(remainder(7i32, 3i32), 1.0);
        assert_eq!(remainder(8i32, 3i32), -1.0);
        // 5/2 = 2.5 rounds to 2
        assert_eq!(remainder(5i32, 2i32), 1.0);
        // 7/2 = 3.5 rounds to 4
        assert_eq!(remainder(7i32, 2i32), -1.0);
        assert!(remainder(1i32, 0i32).is_nan());
    }

    #[test]
    fn test_modf() {
        assert_eq!(modf(3.75f64), (3.0, 0.75));
        assert_eq!(modf(-3.75f32), (-3.0, -0.75));
        assert_eq!(modf(42u32), (42.0, 0.0));
    }
}
