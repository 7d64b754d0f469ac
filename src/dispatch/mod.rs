// ============================================================================
// Dispatch Module
// Evaluate facade operations selected at runtime
// ============================================================================
//
// This module provides:
// - evaluate / evaluate_named: run an Operation over a slice of arguments
// - Outcome: the result shapes the facade produces
// - EvalError: unknown names and wrong argument counts
//
// The facade functions themselves never fail; only the runtime selection
// here can be given bad input.

mod errors;
mod evaluate;
mod outcome;

pub use errors::{EvalError, EvalResult};
pub use evaluate::{evaluate, evaluate_named};
pub use outcome::Outcome;
