// ============================================================================
// Exponential, Logarithmic, Power and Root Wrappers
// ============================================================================

use crate::number::Number;
use crate::primitives;

// ============================================================================
// Exponentials
// ============================================================================

/// e raised to `x`.
#[inline]
pub fn exp<T: Number>(x: T) -> f64 {
    primitives::exp(x.widen())
}

/// 2 raised to `x`.
#[inline]
pub fn exp2<T: Number>(x: T) -> f64 {
    primitives::exp2(x.widen())
}

/// `e^x - 1`, accurate for `x` near zero.
#[inline]
pub fn expm1<T: Number>(x: T) -> f64 {
    primitives::expm1(x.widen())
}

// ============================================================================
// Logarithms
// ============================================================================

/// Natural logarithm. `-inf` at zero, NaN below.
#[inline]
pub fn log<T: Number>(x: T) -> f64 {
    primitives::log(x.widen())
}

#[inline]
pub fn log10<T: Number>(x: T) -> f64 {
    primitives::log10(x.widen())
}

/// `ln(1 + x)`, accurate for `x` near zero.
#[inline]
pub fn log1p<T: Number>(x: T) -> f64 {
    primitives::log1p(x.widen())
}

#[inline]
pub fn log2<T: Number>(x: T) -> f64 {
    primitives::log2(x.widen())
}

/// Binary exponent of `x`, as a float.
#[inline]
pub fn logb<T: Number>(x: T) -> f64 {
    primitives::logb(x.widen())
}

/// Binary exponent of `x`, as an integer.
#[inline]
pub fn ilogb<T: Number>(x: T) -> i32 {
    primitives::ilogb(x.widen())
}

/// Splits `x` into `(frac, exp)` with `x == frac × 2^exp` and
/// `0.5 <= |frac| < 1`.
///
/// # Example
/// ```
/// assert_eq!(generic_math::frexp(8u32), (0.5, 4));
/// ```
#[inline]
pub fn frexp<T: Number>(x: T) -> (f64, i32) {
    primitives::frexp(x.widen())
}

/// `frac × 2^exp`. The exponent is passed through as-is.
#[inline]
pub fn ldexp<T: Number>(frac: T, exp: i32) -> f64 {
    primitives::ldexp(frac.widen(), exp)
}

// ============================================================================
// Power and Root
// ============================================================================

/// `x` raised to `y`. `pow(0, 0)` is `1`.
#[inline]
pub fn pow<T: Number>(x: T, y: T) -> f64 {
    primitives::pow(x.widen(), y.widen())
}

/// Square root. NaN for negative input.
#[inline]
pub fn sqrt<T: Number>(x: T) -> f64 {
    primitives::sqrt(x.widen())
}

#[inline]
pub fn cbrt<T: Number>(x: T) -> f64 {
    primitives::cbrt(x.widen())
}

/// `sqrt(p² + q²)` without intermediate overflow.
#[inline]
pub fn hypot<T: Number>(p: T, q: T) -> f64 {
    primitives::hypot(p.widen(), q.widen())
}
