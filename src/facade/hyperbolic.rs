// ============================================================================
// Hyperbolic Wrappers
// ============================================================================

use crate::number::Number;
use crate::primitives;

/// Inverse hyperbolic cosine. NaN for `x < 1`.
#[inline]
pub fn acosh<T: Number>(x: T) -> f64 {
    primitives::acosh(x.widen())
}

#[inline]
pub fn asinh<T: Number>(x: T) -> f64 {
    primitives::asinh(x.widen())
}

/// Inverse hyperbolic tangent. `±inf` at `±1`, NaN beyond.
#[inline]
pub fn atanh<T: Number>(x: T) -> f64 {
    primitives::atanh(x.widen())
}

#[inline]
pub fn cosh<T: Number>(x: T) -> f64 {
    primitives::cosh(x.widen())
}

#[inline]
pub fn sinh<T: Number>(x: T) -> f64 {
    primitives::sinh(x.widen())
}

#[inline]
pub fn tanh<T: Number>(x: T) -> f64 {
    primitives::tanh(x.widen())
}
