// ============================================================================
// Number Module
// The numeric capability every generic wrapper is written against
// ============================================================================
//
// This module provides:
// - Number: widen to f64 and narrow back, for all float and integer widths
// - NumericError: what can go wrong when narrowing is checked
//
// Design principles:
// - f64 is the only computation type
// - Plain narrowing never fails (saturating `as` semantics)
// - Checked narrowing returns Result (no panics)

mod errors;
mod traits;

pub use errors::{NumericError, NumericResult};
pub use traits::Number;
