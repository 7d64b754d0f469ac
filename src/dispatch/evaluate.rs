// ============================================================================
// Runtime Evaluation
// Call the facade function for an Operation chosen at runtime
// ============================================================================

use super::errors::{EvalError, EvalResult};
use super::outcome::Outcome;
use crate::facade as f;
use crate::number::Number;
use crate::policy::Operation;

/// Evaluates `op` on `args`.
///
/// `args` must hold exactly `op.arity()` values. `int_arg` is the exponent
/// for `ldexp` and the order for `jn`/`yn`; every other operation ignores it.
///
/// # Errors
/// Returns `ArityMismatch` if `args` has the wrong length.
///
/// # Example
/// ```
/// use generic_math::dispatch::{evaluate, Outcome};
/// use generic_math::policy::Operation;
///
/// assert_eq!(evaluate(Operation::Floor, &[7i32], 0), Ok(Outcome::Same(7)));
/// let hyp = evaluate(Operation::Hypot, &[3.0f64, 4.0], 0).unwrap();
/// assert!((hyp.as_f64() - 5.0).abs() < 1e-12);
/// ```
pub fn evaluate<T: Number>(op: Operation, args: &[T], int_arg: i32) -> EvalResult<Outcome<T>> {
    if args.len() != op.arity() {
        tracing::debug!(
            operation = op.name(),
            expected = op.arity(),
            actual = args.len(),
            "rejected evaluation: wrong number of arguments"
        );
        return Err(EvalError::ArityMismatch {
            operation: op,
            expected: op.arity(),
            actual: args.len(),
        });
    }

    tracing::trace!(operation = op.name(), ?args, int_arg, "evaluating");

    let a = args[0];
    let outcome = match op {
        // same-kind
        Operation::Abs => Outcome::Same(f::abs(a)),
        Operation::Ceil => Outcome::Same(f::ceil(a)),
        Operation::Copysign => Outcome::Same(f::copysign(a, args[1])),
        Operation::Dim => Outcome::Same(f::dim(a, args[1])),
        Operation::Floor => Outcome::Same(f::floor(a)),
        Operation::Fma => Outcome::Same(f::fma(a, args[1], args[2])),
        Operation::Max => Outcome::Same(f::max(a, args[1])),
        Operation::Min => Outcome::Same(f::min(a, args[1])),
        Operation::Round => Outcome::Same(f::round(a)),
        Operation::RoundToEven => Outcome::Same(f::round_to_even(a)),
        Operation::Trunc => Outcome::Same(f::trunc(a)),
        // trigonometric
        Operation::Acos => Outcome::Float(f::acos(a)),
        Operation::Asin => Outcome::Float(f::asin(a)),
        Operation::Atan => Outcome::Float(f::atan(a)),
        Operation::Atan2 => Outcome::Float(f::atan2(a, args[1])),
        Operation::Cos => Outcome::Float(f::cos(a)),
        Operation::Sin => Outcome::Float(f::sin(a)),
        Operation::Sincos => {
            let (s, c) = f::sincos(a);
            Outcome::Pair(s, c)
        },
        Operation::Tan => Outcome::Float(f::tan(a)),
        // hyperbolic
        Operation::Acosh => Outcome::Float(f::acosh(a)),
        Operation::Asinh => Outcome::Float(f::asinh(a)),
        Operation::Atanh => Outcome::Float(f::atanh(a)),
        Operation::Cosh => Outcome::Float(f::cosh(a)),
        Operation::Sinh => Outcome::Float(f::sinh(a)),
        Operation::Tanh => Outcome::Float(f::tanh(a)),
        // exponential and logarithmic
        Operation::Exp => Outcome::Float(f::exp(a)),
        Operation::Exp2 => Outcome::Float(f::exp2(a)),
        Operation::Expm1 => Outcome::Float(f::expm1(a)),
        Operation::Frexp => {
            let (frac, exp) = f::frexp(a);
            Outcome::FloatInt(frac, exp)
        },
        Operation::Ilogb => Outcome::Int(f::ilogb(a)),
        Operation::Ldexp => Outcome::Float(f::ldexp(a, int_arg)),
        Operation::Log => Outcome::Float(f::log(a)),
        Operation::Log10 => Outcome::Float(f::log10(a)),
        Operation::Log1p => Outcome::Float(f::log1p(a)),
        Operation::Log2 => Outcome::Float(f::log2(a)),
        Operation::Logb => Outcome::Float(f::logb(a)),
        // power and root
        Operation::Cbrt => Outcome::Float(f::cbrt(a)),
        Operation::Hypot => Outcome::Float(f::hypot(a, args[1])),
        Operation::Pow => Outcome::Float(f::pow(a, args[1])),
        Operation::Sqrt => Outcome::Float(f::sqrt(a)),
        // remainder family
        Operation::Fmod => Outcome::Float(f::fmod(a, args[1])),
        Operation::Modf => {
            let (int, frac) = f::modf(a);
            Outcome::Pair(int, frac)
        },
        Operation::Remainder => Outcome::Float(f::remainder(a, args[1])),
        // special functions
        Operation::Erf => Outcome::Float(f::erf(a)),
        Operation::Erfc => Outcome::Float(f::erfc(a)),
        Operation::Erfcinv => Outcome::Float(f::erfcinv(a)),
        Operation::Erfinv => Outcome::Float(f::erfinv(a)),
        Operation::Gamma => Outcome::Float(f::gamma(a)),
        Operation::Lgamma => {
            let (value, sign) = f::lgamma(a);
            Outcome::FloatInt(value, sign)
        },
        Operation::J0 => Outcome::Float(f::j0(a)),
        Operation::J1 => Outcome::Float(f::j1(a)),
        Operation::Jn => Outcome::Float(f::jn(int_arg, a)),
        Operation::Y0 => Outcome::Float(f::y0(a)),
        Operation::Y1 => Outcome::Float(f::y1(a)),
        Operation::Yn => Outcome::Float(f::yn(int_arg, a)),
        // predicates
        Operation::IsNan => Outcome::Bool(f::is_nan(a)),
        Operation::Signbit => Outcome::Bool(f::signbit(a)),
    };

    Ok(outcome)
}

/// Evaluates the operation whose facade function is called `name`.
///
/// # Errors
/// - `UnknownOperation` if `name` is not a facade function
/// - `ArityMismatch` if `args` has the wrong length
pub fn evaluate_named<T: Number>(name: &str, args: &[T], int_arg: i32) -> EvalResult<Outcome<T>> {
    let op: Operation = name.parse().map_err(|err| {
        tracing::debug!(name, "rejected evaluation: unknown operation");
        EvalError::from(err)
    })?;
    evaluate(op, args, int_arg)
}
