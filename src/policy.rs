// ============================================================================
// Operation Policy Table
// Names, arity and narrowing policy for every facade operation
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Narrowing Policy
// ============================================================================

/// What happens to an operation's f64 result before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Narrowing {
    /// The result is of the same kind as the input and is narrowed back to
    /// the caller's type (floor of an integer is an integer).
    SameKind,
    /// The result is returned in its natural type: f64, bool, i32, or a
    /// tuple of those.
    Natural,
}

impl fmt::Display for Narrowing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narrowing::SameKind => write!(f, "same-kind"),
            Narrowing::Natural => write!(f, "natural"),
        }
    }
}

// ============================================================================
// Operation Table
// ============================================================================

macro_rules! operation_table {
    ($(
        $variant:ident => $name:literal, $narrowing:ident, arity $arity:literal,
        int_arg $int_arg:literal, nan $nan:literal;
    )*) => {
        /// Every operation the facade exposes.
        ///
        /// The variant's `name()` is the name of the facade function that
        /// implements it.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        pub enum Operation {
            $($variant,)*
        }

        impl Operation {
            /// All operations, in table order.
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];

            /// Facade function name, e.g. `"round_to_even"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }

            /// Whether the result is narrowed back to the input type.
            pub const fn narrowing(self) -> Narrowing {
                match self {
                    $(Operation::$variant => Narrowing::$narrowing,)*
                }
            }

            /// Number of generic numeric arguments.
            pub const fn arity(self) -> usize {
                match self {
                    $(Operation::$variant => $arity,)*
                }
            }

            /// Whether the operation also takes an `i32` that is passed
            /// through unwidened (an exponent or a Bessel order).
            pub const fn takes_int_arg(self) -> bool {
                match self {
                    $(Operation::$variant => $int_arg,)*
                }
            }

            /// Whether a NaN in any numeric argument always yields a NaN
            /// (primary) f64 result, whatever the other arguments are.
            pub const fn propagates_nan(self) -> bool {
                match self {
                    $(Operation::$variant => $nan,)*
                }
            }
        }
    };
}

operation_table! {
    // same-kind
    Abs => "abs", SameKind, arity 1, int_arg false, nan true;
    Ceil => "ceil", SameKind, arity 1, int_arg false, nan true;
    Copysign => "copysign", SameKind, arity 2, int_arg false, nan false;
    Dim => "dim", SameKind, arity 2, int_arg false, nan true;
    Floor => "floor", SameKind, arity 1, int_arg false, nan true;
    Fma => "fma", SameKind, arity 3, int_arg false, nan true;
    Max => "max", SameKind, arity 2, int_arg false, nan false;
    Min => "min", SameKind, arity 2, int_arg false, nan false;
    Round => "round", SameKind, arity 1, int_arg false, nan true;
    RoundToEven => "round_to_even", SameKind, arity 1, int_arg false, nan true;
    Trunc => "trunc", SameKind, arity 1, int_arg false, nan true;
    // trigonometric
    Acos => "acos", Natural, arity 1, int_arg false, nan true;
    Asin => "asin", Natural, arity 1, int_arg false, nan true;
    Atan => "atan", Natural, arity 1, int_arg false, nan true;
    Atan2 => "atan2", Natural, arity 2, int_arg false, nan true;
    Cos => "cos", Natural, arity 1, int_arg false, nan true;
    Sin => "sin", Natural, arity 1, int_arg false, nan true;
    Sincos => "sincos", Natural, arity 1, int_arg false, nan true;
    Tan => "tan", Natural, arity 1, int_arg false, nan true;
    // hyperbolic
    Acosh => "acosh", Natural, arity 1, int_arg false, nan true;
    Asinh => "asinh", Natural, arity 1, int_arg false, nan true;
    Atanh => "atanh", Natural, arity 1, int_arg false, nan true;
    Cosh => "cosh", Natural, arity 1, int_arg false, nan true;
    Sinh => "sinh", Natural, arity 1, int_arg false, nan true;
    Tanh => "tanh", Natural, arity 1, int_arg false, nan true;
    // exponential and logarithmic
    Exp => "exp", Natural, arity 1, int_arg false, nan true;
    Exp2 => "exp2", Natural, arity 1, int_arg false, nan true;
    Expm1 => "expm1", Natural, arity 1, int_arg false, nan true;
    Frexp => "frexp", Natural, arity 1, int_arg false, nan true;
    Ilogb => "ilogb", Natural, arity 1, int_arg false, nan false;
    Ldexp => "ldexp", Natural, arity 1, int_arg true, nan true;
    Log => "log", Natural, arity 1, int_arg false, nan true;
    Log10 => "log10", Natural, arity 1, int_arg false, nan true;
    Log1p => "log1p", Natural, arity 1, int_arg false, nan true;
    Log2 => "log2", Natural, arity 1, int_arg false, nan true;
    Logb => "logb", Natural, arity 1, int_arg false, nan true;
    // power and root
    Cbrt => "cbrt", Natural, arity 1, int_arg false, nan true;
    Hypot => "hypot", Natural, arity 2, int_arg false, nan false;
    Pow => "pow", Natural, arity 2, int_arg false, nan false;
    Sqrt => "sqrt", Natural, arity 1, int_arg false, nan true;
    // remainder family
    Fmod => "fmod", Natural, arity 2, int_arg false, nan true;
    Modf => "modf", Natural, arity 1, int_arg false, nan true;
    Remainder => "remainder", Natural, arity 2, int_arg false, nan true;
    // special functions
    Erf => "erf", Natural, arity 1, int_arg false, nan true;
    Erfc => "erfc", Natural, arity 1, int_arg false, nan true;
    Erfcinv => "erfcinv", Natural, arity 1, int_arg false, nan true;
    Erfinv => "erfinv", Natural, arity 1, int_arg false, nan true;
    Gamma => "gamma", Natural, arity 1, int_arg false, nan true;
    Lgamma => "lgamma", Natural, arity 1, int_arg false, nan true;
    J0 => "j0", Natural, arity 1, int_arg false, nan true;
    J1 => "j1", Natural, arity 1, int_arg false, nan true;
    Jn => "jn", Natural, arity 1, int_arg true, nan true;
    Y0 => "y0", Natural, arity 1, int_arg false, nan true;
    Y1 => "y1", Natural, arity 1, int_arg false, nan true;
    Yn => "yn", Natural, arity 1, int_arg true, nan true;
    // predicates
    IsNan => "is_nan", Natural, arity 1, int_arg false, nan false;
    Signbit => "signbit", Natural, arity 1, int_arg false, nan false;
}

impl Operation {
    /// Operations whose result is narrowed back to the input type.
    pub fn same_kind() -> impl Iterator<Item = Operation> {
        Self::ALL
            .iter()
            .copied()
            .filter(|op| op.narrowing() == Narrowing::SameKind)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Returned when a string does not name any operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: {:?}", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Parse a facade function name. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
