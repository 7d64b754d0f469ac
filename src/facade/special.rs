// ============================================================================
// Special Function Wrappers
// Error functions, Gamma and Bessel functions
// ============================================================================

use crate::number::Number;
use crate::primitives;

// ============================================================================
// Error Functions
// ============================================================================

/// Error function.
#[inline]
pub fn erf<T: Number>(x: T) -> f64 {
    primitives::erf(x.widen())
}

/// Complementary error function, `1 - erf(x)`.
#[inline]
pub fn erfc<T: Number>(x: T) -> f64 {
    primitives::erfc(x.widen())
}

/// Inverse of `erf`. Defined on `[-1, 1]`.
#[inline]
pub fn erfinv<T: Number>(x: T) -> f64 {
    primitives::erfinv(x.widen())
}

/// Inverse of `erfc`. Defined on `[0, 2]`.
#[inline]
pub fn erfcinv<T: Number>(x: T) -> f64 {
    primitives::erfcinv(x.widen())
}

// ============================================================================
// Gamma
// ============================================================================

/// Gamma function. Poles at zero and the negative integers.
#[inline]
pub fn gamma<T: Number>(x: T) -> f64 {
    primitives::gamma(x.widen())
}

/// Natural log of `|Γ(x)|` together with the sign of `Γ(x)` (`1` or `-1`).
#[inline]
pub fn lgamma<T: Number>(x: T) -> (f64, i32) {
    primitives::lgamma(x.widen())
}

// ============================================================================
// Bessel Functions
// ============================================================================

/// Bessel function of the first kind, order zero.
#[inline]
pub fn j0<T: Number>(x: T) -> f64 {
    primitives::j0(x.widen())
}

/// Bessel function of the first kind, order one.
#[inline]
pub fn j1<T: Number>(x: T) -> f64 {
    primitives::j1(x.widen())
}

/// Bessel function of the first kind, order `n`.
#[inline]
pub fn jn<T: Number>(n: i32, x: T) -> f64 {
    primitives::jn(n, x.widen())
}

/// Bessel function of the second kind, order zero.
#[inline]
pub fn y0<T: Number>(x: T) -> f64 {
    primitives::y0(x.widen())
}

/// Bessel function of the second kind, order one.
#[inline]
pub fn y1<T: Number>(x: T) -> f64 {
    primitives::y1(x.widen())
}

/// Bessel function of the second kind, order `n`.
#[inline]
pub fn yn<T: Number>(n: i32, x: T) -> f64 {
    primitives::yn(n, x.widen())
}
