// ============================================================================
// Dispatch Errors
// Error types for evaluating an operation selected at runtime
// ============================================================================

use crate::policy::{Operation, UnknownOperation};
use std::fmt;

/// Errors that can occur when an operation is evaluated by name or value
/// instead of through its facade function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The name does not match any facade function
    UnknownOperation(String),
    /// Wrong number of numeric arguments for the operation
    ArityMismatch {
        operation: Operation,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownOperation(name) => write!(f, "unknown operation: {:?}", name),
            EvalError::ArityMismatch {
                operation,
                expected,
                actual,
            } => write!(
                f,
                "{} takes {} numeric argument(s), got {}",
                operation, expected, actual
            ),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<UnknownOperation> for EvalError {
    fn from(err: UnknownOperation) -> Self {
        EvalError::UnknownOperation(err.0)
    }
}

/// Result type alias for dispatch
pub type EvalResult<T> = Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::ArityMismatch {
            operation: Operation::Hypot,
            expected: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "hypot takes 2 numeric argument(s), got 1");

        let err = EvalError::UnknownOperation("sec".to_string());
        assert_eq!(err.to_string(), "unknown operation: \"sec\"");
    }

    #[test]
    fn test_from_unknown_operation() {
        let err: EvalError = UnknownOperation("csc".to_string()).into();
        assert_eq!(err, EvalError::UnknownOperation("csc".to_string()));
    }
}
