// ============================================================================
// Trigonometric Wrappers
// ============================================================================

use crate::number::Number;
use crate::primitives;

/// Arc cosine of `x`, in radians. NaN outside `[-1, 1]`.
#[inline]
pub fn acos<T: Number>(x: T) -> f64 {
    primitives::acos(x.widen())
}

/// Arc sine of `x`, in radians. NaN outside `[-1, 1]`.
#[inline]
pub fn asin<T: Number>(x: T) -> f64 {
    primitives::asin(x.widen())
}

/// Arc tangent of `x`, in radians.
#[inline]
pub fn atan<T: Number>(x: T) -> f64 {
    primitives::atan(x.widen())
}

/// Arc tangent of `y / x`, using the signs of both to pick the quadrant.
#[inline]
pub fn atan2<T: Number>(y: T, x: T) -> f64 {
    primitives::atan2(y.widen(), x.widen())
}

#[inline]
pub fn cos<T: Number>(x: T) -> f64 {
    primitives::cos(x.widen())
}

#[inline]
pub fn sin<T: Number>(x: T) -> f64 {
    primitives::sin(x.widen())
}

/// Sine and cosine of `x` in one call, as `(sin, cos)`.
#[inline]
pub fn sincos<T: Number>(x: T) -> (f64, f64) {
    primitives::sincos(x.widen())
}

#[inline]
pub fn tan<T: Number>(x: T) -> f64 {
    primitives::tan(x.widen())
}
