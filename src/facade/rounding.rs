// ============================================================================
// Same-Kind Wrappers
// Rounding, sign, comparison and fused multiply-add
// ============================================================================
//
// Each function here narrows its f64 result back to the input type, so
// `floor(7i32)` is an `i32` and `abs(-2.5f32)` is an `f32`. Narrowing
// saturates for integers (see `Number::narrow`); the `checked` module has
// variants that report values that do not fit instead.

use crate::number::Number;
use crate::primitives;

/// Absolute value.
///
/// For signed integers `abs(MIN)` saturates to `MAX`.
#[inline]
pub fn abs<T: Number>(x: T) -> T {
    T::narrow(primitives::fabs(x.widen()))
}

/// Smallest integer value not less than `x`.
#[inline]
pub fn ceil<T: Number>(x: T) -> T {
    T::narrow(primitives::ceil(x.widen()))
}

/// Largest integer value not greater than `x`.
#[inline]
pub fn floor<T: Number>(x: T) -> T {
    T::narrow(primitives::floor(x.widen()))
}

/// Nearest integer value, halfway cases away from zero.
#[inline]
pub fn round<T: Number>(x: T) -> T {
    T::narrow(primitives::round(x.widen()))
}

/// Nearest integer value, halfway cases to even.
#[inline]
pub fn round_to_even<T: Number>(x: T) -> T {
    T::narrow(primitives::round_to_even(x.widen()))
}

/// Integer part of `x`, rounding toward zero.
#[inline]
pub fn trunc<T: Number>(x: T) -> T {
    T::narrow(primitives::trunc(x.widen()))
}

/// Magnitude of `f` with the sign of `sign`.
///
/// For unsigned types `sign` is never negative, so the result is `f`.
#[inline]
pub fn copysign<T: Number>(f: T, sign: T) -> T {
    T::narrow(primitives::copysign(f.widen(), sign.widen()))
}

/// `x - y` if positive, otherwise zero.
#[inline]
pub fn dim<T: Number>(x: T, y: T) -> T {
    T::narrow(primitives::fdim(x.widen(), y.widen()))
}

/// Larger of `x` and `y`. NaN if either is NaN (unless the other is `+inf`).
#[inline]
pub fn max<T: Number>(x: T, y: T) -> T {
    T::narrow(primitives::fmax(x.widen(), y.widen()))
}

/// Smaller of `x` and `y`. NaN if either is NaN (unless the other is `-inf`).
#[inline]
pub fn min<T: Number>(x: T, y: T) -> T {
    T::narrow(primitives::fmin(x.widen(), y.widen()))
}

/// `x * y + z`, computed in f64 with one rounding, then narrowed.
#[inline]
pub fn fma<T: Number>(x: T, y: T, z: T) -> T {
    T::narrow(primitives::fma(x.widen(), y.widen(), z.widen()))
}
