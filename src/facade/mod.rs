// ============================================================================
// Facade Module
// One generic entry point per double-precision math operation
// ============================================================================
//
// Every wrapper widens its numeric arguments to f64, calls the matching
// function in `primitives`, and then either:
// - narrows the result back to the input type (same-kind operations in
//   `rounding`), or
// - returns the natural result unchanged (everything else).
//
// Integer secondary arguments (ldexp exponent, jn/yn order) are never
// widened. The full narrowing table lives in `crate::policy`.

pub mod checked;

mod classify;
mod exponential;
mod hyperbolic;
mod remainder;
mod rounding;
mod special;
mod trig;

pub use classify::{is_nan, signbit};
pub use exponential::{
    cbrt, exp, exp2, expm1, frexp, hypot, ilogb, ldexp, log, log10, log1p, log2, logb, pow, sqrt,
};
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use remainder::{fmod, modf, remainder};
pub use rounding::{abs, ceil, copysign, dim, floor, fma, max, min, round, round_to_even, trunc};
pub use special::{erf, erfc, erfcinv, erfinv, gamma, j0, j1, jn, lgamma, y0, y1, yn};
pub use trig::{acos, asin, atan, atan2, cos, sin, sincos, tan};
