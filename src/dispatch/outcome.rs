// ============================================================================
// Evaluation Outcome
// The result shapes a facade operation can produce
// ============================================================================

use crate::number::Number;

/// Result of a dynamically evaluated operation.
///
/// Each variant matches the return type of one group of facade functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<T: Number> {
    /// Same-kind result, narrowed back to the input type
    Same(T),
    /// Natural f64 result
    Float(f64),
    /// Integer result (`ilogb`)
    Int(i32),
    /// Predicate result (`is_nan`, `signbit`)
    Bool(bool),
    /// Two f64 values (`sincos`, `modf`)
    Pair(f64, f64),
    /// An f64 and an i32 (`frexp`, `lgamma`)
    FloatInt(f64, i32),
}

impl<T: Number> Outcome<T> {
    /// The primary value as f64: the first element of a pair, `1.0`/`0.0`
    /// for booleans.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Outcome::Same(v) => v.widen(),
            Outcome::Float(v) => v,
            Outcome::Int(v) => v as f64,
            Outcome::Bool(v) => {
                if v {
                    1.0
                } else {
                    0.0
                }
            },
            Outcome::Pair(first, _) => first,
            Outcome::FloatInt(first, _) => first,
        }
    }

    /// The same-kind value, if this outcome has one.
    pub fn same(self) -> Option<T> {
        match self {
            Outcome::Same(v) => Some(v),
            _ => None,
        }
    }
}
