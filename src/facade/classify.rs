// ============================================================================
// Predicate Wrappers
// ============================================================================

use crate::number::Number;
use crate::primitives;

/// Whether `x` is NaN. Always `false` for integer types.
#[inline]
pub fn is_nan<T: Number>(x: T) -> bool {
    primitives::is_nan(x.widen())
}

/// Whether the sign bit of `x` is set, including `-0.0` and negative NaN.
#[inline]
pub fn signbit<T: Number>(x: T) -> bool {
    primitives::signbit(x.widen())
}
