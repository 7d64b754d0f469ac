// ============================================================================
// Number Capability
// Widening to f64 and narrowing back for every primitive numeric type
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_traits::NumCast;
use std::fmt::Debug;

/// A primitive numeric type that can take part in an f64 round trip.
///
/// Implemented for every float and integer width. `widen` is exact for
/// floats up to 64 bits and for integers up to 2^53 in magnitude; wider
/// integers are rounded to the nearest f64.
///
/// # Narrowing
/// `narrow` follows Rust `as` casts:
/// - floats round to nearest (values out of `f32` range become ±inf)
/// - integers truncate toward zero and saturate at `MIN`/`MAX`
/// - NaN narrows to `0` for integers
///
/// `try_narrow` reports the integer cases that `narrow` silently clamps.
pub trait Number: Copy + PartialOrd + Debug + Send + Sync + 'static + NumCast {
    /// Whether the type is an IEEE float (and can therefore hold NaN/inf).
    const IS_FLOAT: bool;

    /// Convert to the f64 computation type.
    fn widen(self) -> f64;

    /// Convert an f64 result back, saturating.
    fn narrow(value: f64) -> Self;

    /// Convert an f64 result back, failing when it does not fit.
    ///
    /// # Errors
    /// - `NotANumber` if `value` is NaN and `Self` is an integer
    /// - `Overflow` / `Underflow` if `value` is outside `Self`'s range
    ///
    /// For integers wider than 53 bits, `MAX` widens to the next power of
    /// two; that value narrows back to `MAX` rather than overflowing.
    fn try_narrow(value: f64) -> NumericResult<Self>;
}

macro_rules! impl_number_float {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const IS_FLOAT: bool = true;

            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn narrow(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn try_narrow(value: f64) -> NumericResult<Self> {
                Ok(value as $t)
            }
        }
    )*};
}

macro_rules! impl_number_int {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const IS_FLOAT: bool = false;

            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn narrow(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn try_narrow(value: f64) -> NumericResult<Self> {
                if value.is_nan() {
                    return Err(NumericError::NotANumber);
                }
                // MAX of a 64-bit or wider type widens to one past MAX
                if value == <$t>::MAX as f64 {
                    return Ok(<$t>::MAX);
                }
                <$t as NumCast>::from(value).ok_or(if value > 0.0 {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                })
            }
        }
    )*};
}

impl_number_float!(f32, f64);
impl_number_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
