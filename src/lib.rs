// ============================================================================
// Generic Math Library
// Double-precision math functions callable on any primitive numeric type
// ============================================================================

//! # Generic Math
//!
//! Generic wrappers over a double-precision math library. Every function
//! accepts any float or integer type, widens it to `f64`, calls the matching
//! primitive and hands back the result.
//!
//! ## Narrowing
//!
//! - **Same-kind** operations (`abs`, `ceil`, `floor`, `round`,
//!   `round_to_even`, `trunc`, `copysign`, `dim`, `max`, `min`, `fma`)
//!   return the caller's type: `floor(7i32)` is an `i32`.
//! - **Everything else** returns its natural type: `f64` for
//!   transcendental functions, `bool` for predicates, `i32` for `ilogb`,
//!   tuples for `sincos`, `frexp`, `modf` and `lgamma`.
//!
//! The full table is [`policy::Operation`]. Integer narrowing saturates;
//! [`checked`] has variants that report out-of-range results instead.
//!
//! ## Example
//!
//! ```rust
//! use generic_math::prelude::*;
//!
//! // Transcendental functions take any numeric type and return f64
//! let angle = atan2(1i32, 1i32);
//! assert!((angle - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
//! assert!(sqrt(-1.0f64).is_nan());
//! assert_eq!(pow(0.0f64, 0.0), 1.0);
//!
//! // Same-kind functions keep the caller's type
//! let x: u16 = max(3u16, 9u16);
//! assert_eq!(x, 9);
//! assert_eq!(floor(5i64), 5);
//!
//! // Multi-value results
//! assert_eq!(sincos(0.0f64), (0.0, 1.0));
//! assert_eq!(frexp(8.0f64), (0.5, 4));
//! ```
//!
//! ## Errors
//!
//! The facade never fails: out-of-domain input yields NaN or infinity as
//! defined by the underlying primitive. Only [`checked`] narrowing and
//! runtime [`dispatch`] return `Result`.

pub mod dispatch;
pub mod facade;
pub mod number;
pub mod policy;
pub mod primitives;

pub use facade::*;

// Re-exports for convenience
pub mod prelude {
    pub use crate::dispatch::{evaluate, evaluate_named, EvalError, Outcome};
    pub use crate::facade::checked;
    pub use crate::facade::{
        abs, acos, acosh, asin, asinh, atan, atan2, atanh, cbrt, ceil, copysign, cos, cosh, dim,
        erf, erfc, erfcinv, erfinv, exp, exp2, expm1, floor, fma, fmod, frexp, gamma, hypot, ilogb,
        is_nan, j0, j1, jn, ldexp, lgamma, log, log10, log1p, log2, logb, max, min, modf, pow,
        remainder, round, round_to_even, signbit, sin, sincos, sinh, sqrt, tan, tanh, trunc, y0,
        y1, yn,
    };
    pub use crate::number::{Number, NumericError, NumericResult};
    pub use crate::policy::{Narrowing, Operation};
}
