// ============================================================================
// Narrowing Errors
// Error types for converting f64 results back into a caller's numeric type
// ============================================================================

use std::fmt;

/// Errors that can occur when a double-precision result is narrowed back
/// into the caller's numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the target type's maximum value
    Overflow,
    /// Result below the target type's minimum value
    Underflow,
    /// Result was NaN and the target type has no NaN
    NotANumber,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "narrowing overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "narrowing underflow: result below minimum value")
            },
            NumericError::NotANumber => {
                write!(f, "narrowing failed: NaN has no representation in target type")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for checked narrowing
pub type NumericResult<T> = Result<T, NumericError>;
