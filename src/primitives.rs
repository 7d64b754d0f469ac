// ============================================================================
// Double-Precision Primitives
// The math library the facade delegates to
// ============================================================================
//
// Every routine here is the f64 primitive for one facade operation. Almost
// all of them forward to `libm`; the inverse error functions come from
// `pxfm`. A few operations the library does not expose directly (logb,
// modf, NaN-propagating max/min) are expressed on top of libm here so the
// facade only ever sees one f64 function per operation.
//
// Nothing in this module validates input: out-of-domain arguments produce
// whatever IEEE special value the library defines.

// ============================================================================
// Trigonometric
// ============================================================================

#[inline]
pub fn acos(x: f64) -> f64 {
    libm::acos(x)
}

#[inline]
pub fn asin(x: f64) -> f64 {
    libm::asin(x)
}

#[inline]
pub fn atan(x: f64) -> f64 {
    libm::atan(x)
}

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

#[inline]
pub fn cos(x: f64) -> f64 {
    libm::cos(x)
}

#[inline]
pub fn sin(x: f64) -> f64 {
    libm::sin(x)
}

/// Returns `(sin(x), cos(x))`.
#[inline]
pub fn sincos(x: f64) -> (f64, f64) {
    libm::sincos(x)
}

#[inline]
pub fn tan(x: f64) -> f64 {
    libm::tan(x)
}

// ============================================================================
// Hyperbolic
// ============================================================================

#[inline]
pub fn acosh(x: f64) -> f64 {
    libm::acosh(x)
}

#[inline]
pub fn asinh(x: f64) -> f64 {
    libm::asinh(x)
}

#[inline]
pub fn atanh(x: f64) -> f64 {
    libm::atanh(x)
}

#[inline]
pub fn cosh(x: f64) -> f64 {
    libm::cosh(x)
}

#[inline]
pub fn sinh(x: f64) -> f64 {
    libm::sinh(x)
}

#[inline]
pub fn tanh(x: f64) -> f64 {
    libm::tanh(x)
}

// ============================================================================
// Exponential and Logarithmic
// ============================================================================

#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}

#[inline]
pub fn exp2(x: f64) -> f64 {
    libm::exp2(x)
}

#[inline]
pub fn expm1(x: f64) -> f64 {
    libm::expm1(x)
}

#[inline]
pub fn log(x: f64) -> f64 {
    libm::log(x)
}

#[inline]
pub fn log10(x: f64) -> f64 {
    libm::log10(x)
}

#[inline]
pub fn log1p(x: f64) -> f64 {
    libm::log1p(x)
}

#[inline]
pub fn log2(x: f64) -> f64 {
    libm::log2(x)
}

/// Binary exponent of `x` as a float.
///
/// `logb(±inf) = +inf`, `logb(±0) = -inf`, `logb(NaN) = NaN`.
#[inline]
pub fn logb(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else if x.is_infinite() {
        f64::INFINITY
    } else if x == 0.0 {
        f64::NEG_INFINITY
    } else {
        libm::ilogb(x) as f64
    }
}

/// Binary exponent of `x` as an integer.
///
/// `ilogb(0)` and `ilogb(NaN)` are both `i32::MIN`; `ilogb(±inf)` is
/// `i32::MAX`. NaN is not mapped to `i32::MAX`.
#[inline]
pub fn ilogb(x: f64) -> i32 {
    libm::ilogb(x)
}

/// Splits `x` into a fraction in `[0.5, 1)` and a power of two.
#[inline]
pub fn frexp(x: f64) -> (f64, i32) {
    libm::frexp(x)
}

/// `frac × 2^exp`.
#[inline]
pub fn ldexp(frac: f64, exp: i32) -> f64 {
    libm::ldexp(frac, exp)
}

// ============================================================================
// Power and Root
// ============================================================================

#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    libm::pow(x, y)
}

#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[inline]
pub fn cbrt(x: f64) -> f64 {
    libm::cbrt(x)
}

#[inline]
pub fn hypot(p: f64, q: f64) -> f64 {
    libm::hypot(p, q)
}

// ============================================================================
// Remainder Family
// ============================================================================

/// Floating-point remainder of `x / y`, with the sign of `x`.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// IEEE 754 remainder: `x - n*y` where `n` is `x/y` rounded to even.
#[inline]
pub fn remainder(x: f64, y: f64) -> f64 {
    libm::remainder(x, y)
}

/// Returns `(integral, fractional)`, both carrying the sign of `x`.
///
/// `modf(±inf) = (±inf, ±0)`; the fractional part of an infinity is a
/// signed zero, not NaN.
#[inline]
pub fn modf(x: f64) -> (f64, f64) {
    if x.is_infinite() {
        return (x, libm::copysign(0.0, x));
    }
    let integral = libm::trunc(x);
    (integral, libm::copysign(x - integral, x))
}

// ============================================================================
// Rounding and Sign
// ============================================================================

#[inline]
pub fn fabs(x: f64) -> f64 {
    libm::fabs(x)
}

#[inline]
pub fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

#[inline]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

/// Rounds half away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    libm::round(x)
}

/// Rounds half to even.
#[inline]
pub fn round_to_even(x: f64) -> f64 {
    libm::rint(x)
}

#[inline]
pub fn trunc(x: f64) -> f64 {
    libm::trunc(x)
}

#[inline]
pub fn copysign(f: f64, sign: f64) -> f64 {
    libm::copysign(f, sign)
}

/// Positive difference: `max(x - y, 0)`.
///
/// `fdim(inf, inf)` is `0`, not NaN; NaN in either argument gives NaN.
#[inline]
pub fn fdim(x: f64, y: f64) -> f64 {
    libm::fdim(x, y)
}

/// Larger of `x` and `y`.
///
/// `+inf` wins over everything, then NaN propagates, and `+0` is larger
/// than `-0`.
#[inline]
pub fn fmax(x: f64, y: f64) -> f64 {
    if x == f64::INFINITY || y == f64::INFINITY {
        f64::INFINITY
    } else if x.is_nan() || y.is_nan() {
        f64::NAN
    } else if x == 0.0 && y == 0.0 {
        if x.is_sign_negative() {
            y
        } else {
            x
        }
    } else {
        libm::fmax(x, y)
    }
}

/// Smaller of `x` and `y`.
///
/// `-inf` wins over everything, then NaN propagates, and `-0` is smaller
/// than `+0`.
#[inline]
pub fn fmin(x: f64, y: f64) -> f64 {
    if x == f64::NEG_INFINITY || y == f64::NEG_INFINITY {
        f64::NEG_INFINITY
    } else if x.is_nan() || y.is_nan() {
        f64::NAN
    } else if x == 0.0 && y == 0.0 {
        if x.is_sign_negative() {
            x
        } else {
            y
        }
    } else {
        libm::fmin(x, y)
    }
}

/// `x * y + z` with a single rounding.
#[inline]
pub fn fma(x: f64, y: f64, z: f64) -> f64 {
    libm::fma(x, y, z)
}

// ============================================================================
// Special Functions
// ============================================================================

#[inline]
pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

#[inline]
pub fn erfc(x: f64) -> f64 {
    libm::erfc(x)
}

/// Inverse error function. Keeps the sign of a zero argument.
#[inline]
pub fn erfinv(x: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    pxfm::f_erfinv(x)
}

#[inline]
pub fn erfcinv(x: f64) -> f64 {
    pxfm::f_erfcinv(x)
}

#[inline]
pub fn gamma(x: f64) -> f64 {
    libm::tgamma(x)
}

/// Returns `(ln|Γ(x)|, sign of Γ(x))`.
#[inline]
pub fn lgamma(x: f64) -> (f64, i32) {
    libm::lgamma_r(x)
}

#[inline]
pub fn j0(x: f64) -> f64 {
    libm::j0(x)
}

#[inline]
pub fn j1(x: f64) -> f64 {
    libm::j1(x)
}

#[inline]
pub fn jn(n: i32, x: f64) -> f64 {
    libm::jn(n, x)
}

#[inline]
pub fn y0(x: f64) -> f64 {
    libm::y0(x)
}

#[inline]
pub fn y1(x: f64) -> f64 {
    libm::y1(x)
}

#[inline]
pub fn yn(n: i32, x: f64) -> f64 {
    libm::yn(n, x)
}

// ============================================================================
// Classification
// ============================================================================

#[inline]
pub fn is_nan(x: f64) -> bool {
    x.is_nan()
}

#[inline]
pub fn signbit(x: f64) -> bool {
    x.is_sign_negative()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_values_of_ilogb_fdim_modf() {
        assert_eq!(ilogb(f64::NAN), i32::MIN);
        assert_eq!(ilogb(0.0), i32::MIN);
        assert_eq!(ilogb(f64::INFINITY), i32::MAX);
        assert_eq!(fdim(f64::INFINITY, f64::INFINITY), 0.0);
        assert!(fdim(f64::NAN, 1.0).is_nan());
        let (int, frac) = modf(f64::NEG_INFINITY);
        assert_eq!(int, f64::NEG_INFINITY);
        assert_eq!(frac, 0.0);
        assert!(frac.is_sign_negative());
    }

    #[test]
    fn test_erfinv_keeps_signed_zero() {
        assert!(erfinv(-0.0).is_sign_negative());
        assert_eq!(erfinv(-0.0), 0.0);
        assert!(erfinv(0.0).is_sign_positive());
    }

    #[test]
    fn test_logb_special_values() {
        assert_eq!(logb(8.0), 3.0);
        assert_eq!(logb(0.75), -1.0);
        assert_eq!(logb(f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(logb(0.0), f64::NEG_INFINITY);
        assert_eq!(logb(-0.0), f64::NEG_INFINITY);
        assert!(logb(f64::NAN).is_nan());
    }

    #[test]
    fn test_modf_splits_with_sign() {
        assert_eq!(modf(3.25), (3.0, 0.25));
        assert_eq!(modf(-3.25), (-3.0, -0.25));

        let (int, frac) = modf(-0.5);
        assert_eq!(int, 0.0);
        assert!(int.is_sign_negative());
        assert_eq!(frac, -0.5);
    }

    #[test]
    fn test_modf_infinite_and_nan() {
        let (int, frac) = modf(f64::INFINITY);
        assert_eq!(int, f64::INFINITY);
        assert_eq!(frac, 0.0);
        assert!(frac.is_sign_positive());

        let (int, frac) = modf(f64::NEG_INFINITY);
        assert_eq!(int, f64::NEG_INFINITY);
        assert!(frac.is_sign_negative());

        let (int, frac) = modf(f64::NAN);
        assert!(int.is_nan());
        assert!(frac.is_nan());
    }

    #[test]
    fn test_fmax_fmin_nan_propagation() {
        assert!(fmax(1.0, f64::NAN).is_nan());
        assert!(fmax(f64::NAN, 1.0).is_nan());
        assert!(fmin(1.0, f64::NAN).is_nan());
        assert_eq!(fmax(f64::NAN, f64::INFINITY), f64::INFINITY);
        assert_eq!(fmin(f64::NEG_INFINITY, f64::NAN), f64::NEG_INFINITY);
    }

    #[test]
    fn test_fmax_fmin_signed_zero() {
        assert!(fmax(-0.0, 0.0).is_sign_positive());
        assert!(fmax(0.0, -0.0).is_sign_positive());
        assert!(fmin(0.0, -0.0).is_sign_negative());
        assert!(fmin(-0.0, 0.0).is_sign_negative());
        assert!(fmax(-0.0, -0.0).is_sign_negative());
    }

    #[test]
    fn test_fmax_fmin_ordinary() {
        assert_eq!(fmax(2.0, 3.0), 3.0);
        assert_eq!(fmin(2.0, 3.0), 2.0);
        assert_eq!(fmax(-2.0, -3.0), -2.0);
    }

    #[test]
    fn test_round_variants() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(round_to_even(2.5), 2.0);
        assert_eq!(round_to_even(3.5), 4.0);
        assert_eq!(round_to_even(-2.5), -2.0);
    }

    #[test]
    fn test_inverse_error_functions() {
        assert_eq!(erfinv(0.0), 0.0);
        assert!((erf(erfinv(0.5)) - 0.5).abs() < 1e-10);
        assert!((erfc(erfcinv(0.3)) - 0.3).abs() < 1e-10);
        assert!(erfinv(f64::NAN).is_nan());
    }

    #[test]
    fn test_lgamma_sign() {
        let (value, sign) = lgamma(-0.5);
        assert_eq!(sign, -1);
        // Γ(-0.5) = -2√π
        assert!((value - (2.0 * std::f64::consts::PI.sqrt()).ln()).abs() < 1e-12);
    }
}
