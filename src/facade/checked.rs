// ============================================================================
// Checked Same-Kind Wrappers
// Same-kind operations that report results the input type cannot hold
// ============================================================================
//
// The plain wrappers saturate when narrowing (`abs(i8::MIN) == i8::MAX`,
// `floor(NaN) as i32 == 0`). These variants run the same f64 computation
// and narrow with `Number::try_narrow` instead.
//
// ```
// use generic_math::checked;
// use generic_math::number::NumericError;
//
// assert_eq!(checked::abs(-5i8), Ok(5));
// assert_eq!(checked::abs(i8::MIN), Err(NumericError::Overflow));
// ```

use crate::number::{Number, NumericResult};
use crate::primitives;

#[inline]
fn narrow_checked<T: Number>(operation: &'static str, value: f64) -> NumericResult<T> {
    T::try_narrow(value).map_err(|err| {
        tracing::debug!(
            operation,
            value,
            ty = std::any::type_name::<T>(),
            %err,
            "checked narrowing failed"
        );
        err
    })
}

#[inline]
pub fn abs<T: Number>(x: T) -> NumericResult<T> {
    narrow_checked("abs", primitives::fabs(x.widen()))
}

#[inline]
pub fn ceil<T: Number>(x: T) -> NumericResult<T> {
    narrow_checked("ceil", primitives::ceil(x.widen()))
}

#[inline]
pub fn floor<T: Number>(x: T) -> NumericResult<T> {
    narrow_checked("floor", primitives::floor(x.widen()))
}

#[inline]
pub fn round<T: Number>(x: T) -> NumericResult<T> {
    narrow_checked("round", primitives::round(x.widen()))
}

#[inline]
pub fn round_to_even<T: Number>(x: T) -> NumericResult<T> {
    narrow_checked("round_to_even", primitives::round_to_even(x.widen()))
}

#[inline]
pub fn trunc<T: Number>(x: T) -> NumericResult<T> {
    narrow_checked("trunc", primitives::trunc(x.widen()))
}

#[inline]
pub fn copysign<T: Number>(f: T, sign: T) -> NumericResult<T> {
    narrow_checked("copysign", primitives::copysign(f.widen(), sign.widen()))
}

#[inline]
pub fn dim<T: Number>(x: T, y: T) -> NumericResult<T> {
    narrow_checked("dim", primitives::fdim(x.widen(), y.widen()))
}

#[inline]
pub fn max<T: Number>(x: T, y: T) -> NumericResult<T> {
    narrow_checked("max", primitives::fmax(x.widen(), y.widen()))
}

#[inline]
pub fn min<T: Number>(x: T, y: T) -> NumericResult<T> {
    narrow_checked("min", primitives::fmin(x.widen(), y.widen()))
}

/// Checked `x * y + z`. Fails when the f64 result leaves `T`'s
/// range, e.g. `fma(200u8, 2, 0)`.
#[inline]
pub fn fma<T: Number>(x: T, y: T, z: T) -> NumericResult<T> {
    narrow_checked("fma", primitives::fma(x.widen(), y.widen(), z.widen()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::NumericError;

    #[test]
    fn test_in_range_matches_plain() {
        assert_eq!(abs(-7i32), Ok(7));
        assert_eq!(floor(9u16), Ok(9));
        assert_eq!(ceil(-2.5f64), Ok(-2.0));
        assert_eq!(round(2.5f32), Ok(3.0));
        assert_eq!(round_to_even(2.5f32), Ok(2.0));
        assert_eq!(trunc(-9i64), Ok(-9));
        assert_eq!(copysign(4i32, -1i32), Ok(-4));
        assert_eq!(dim(2u8, 5u8), Ok(0));
        assert_eq!(max(2i8, 3i8), Ok(3));
        assert_eq!(min(2i8, 3i8), Ok(2));
        assert_eq!(fma(2i32, 3i32, 4i32), Ok(10));
    }

    #[test]
    fn test_abs_of_signed_min_overflows() {
        assert_eq!(abs(i8::MIN), Err(NumericError::Overflow));
        assert_eq!(abs(i16::MIN), Err(NumericError::Overflow));
    }

    #[test]
    fn test_max_of_wide_integers_fits() {
        assert_eq!(max(i64::MAX, 0i64), Ok(i64::MAX));
        assert_eq!(abs(i64::MAX), Ok(i64::MAX));
        assert_eq!(floor(u64::MAX), Ok(u64::MAX));
        assert_eq!(min(u64::MAX, u64::MAX), Ok(u64::MAX));
        assert_eq!(trunc(i64::MIN), Ok(i64::MIN));
    }

    #[test]
    fn test_copysign_out_of_range() {
        // -128 fits, but +128 does not
        assert_eq!(copysign(i8::MIN, 1i8), Err(NumericError::Overflow));
        assert_eq!(copysign(127i8, -1i8), Ok(-127));
    }

    #[test]
    fn test_fma_overflow_and_underflow() {
        assert_eq!(fma(200u8, 2u8, 0u8), Err(NumericError::Overflow));
        assert_eq!(fma(i32::MIN, 1i32, -1i32), Err(NumericError::Underflow));
        assert_eq!(fma(1u32, 0u32, 0u32), Ok(0));
    }

    #[test]
    fn test_float_types_never_fail() {
        assert!(max(f64::NAN, 1.0).unwrap().is_nan());
        assert!(abs(f32::NAN).unwrap().is_nan());
        assert_eq!(fma(f32::MAX, 2.0, 0.0), Ok(f32::INFINITY));
    }
}
