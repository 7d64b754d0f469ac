// ============================================================================
// Facade Properties
// Wrappers agree with the f64 primitives, narrowing rules hold, NaN flows
// ============================================================================

use generic_math::dispatch::evaluate;
use generic_math::policy::Operation;
use generic_math::number::Number;
use generic_math::primitives;
use proptest::prelude::*;

/// Bitwise equality that treats every NaN as equal.
fn same_f64(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

// Largest integer magnitude that survives the f64 round trip exactly
const EXACT: i64 = 1 << 53;

proptest! {
    // ------------------------------------------------------------------------
    // op(x) == primitive(f64(x))
    // ------------------------------------------------------------------------

    #[test]
    fn natural_results_match_primitives_for_integers(x in any::<i32>(), y in any::<i32>()) {
        let (fx, fy) = (x as f64, y as f64);
        prop_assert!(same_f64(generic_math::sin(x), primitives::sin(fx)));
        prop_assert!(same_f64(generic_math::log(x), primitives::log(fx)));
        prop_assert!(same_f64(generic_math::cbrt(x), primitives::cbrt(fx)));
        prop_assert!(same_f64(generic_math::erf(x), primitives::erf(fx)));
        prop_assert!(same_f64(generic_math::atan2(y, x), primitives::atan2(fy, fx)));
        prop_assert!(same_f64(generic_math::hypot(x, y), primitives::hypot(fx, fy)));
        prop_assert!(same_f64(generic_math::fmod(x, y), primitives::fmod(fx, fy)));
        prop_assert_eq!(generic_math::ilogb(x), primitives::ilogb(fx));
    }

    #[test]
    fn natural_results_match_primitives_for_f32(x in any::<f32>()) {
        let fx = x as f64;
        prop_assert!(same_f64(generic_math::exp(x), primitives::exp(fx)));
        prop_assert!(same_f64(generic_math::tanh(x), primitives::tanh(fx)));
        prop_assert!(same_f64(generic_math::sqrt(x), primitives::sqrt(fx)));
        prop_assert!(same_f64(generic_math::j0(x), primitives::j0(fx)));

        let (s, c) = generic_math::sincos(x);
        let (ps, pc) = primitives::sincos(fx);
        prop_assert!(same_f64(s, ps) && same_f64(c, pc));
    }

    #[test]
    fn multi_value_results_match_primitives(x in any::<f64>()) {
        let (frac, exp) = generic_math::frexp(x);
        let (pfrac, pexp) = primitives::frexp(x);
        prop_assert!(same_f64(frac, pfrac));
        prop_assert_eq!(exp, pexp);

        let (int, fract) = generic_math::modf(x);
        let (pint, pfract) = primitives::modf(x);
        prop_assert!(same_f64(int, pint) && same_f64(fract, pfract));
    }

    #[test]
    fn int_args_are_passed_through(x in -100.0f64..100.0, n in -8i32..8) {
        prop_assert!(same_f64(generic_math::ldexp(x, n), primitives::ldexp(x, n)));
        prop_assert!(same_f64(generic_math::jn(n, x), primitives::jn(n, x)));
        prop_assert!(same_f64(generic_math::yn(n, x), primitives::yn(n, x)));
    }

    // ------------------------------------------------------------------------
    // Narrowing
    // ------------------------------------------------------------------------

    #[test]
    fn rounding_is_idempotent_on_exact_integers(x in -EXACT..=EXACT) {
        prop_assert_eq!(generic_math::floor(x), x);
        prop_assert_eq!(generic_math::ceil(x), x);
        prop_assert_eq!(generic_math::round(x), x);
        prop_assert_eq!(generic_math::round_to_even(x), x);
        prop_assert_eq!(generic_math::trunc(x), x);
    }

    #[test]
    fn same_kind_integer_ops_match_native(x in any::<u8>(), y in any::<u8>(), z in any::<u8>()) {
        prop_assert_eq!(generic_math::max(x, y), x.max(y));
        prop_assert_eq!(generic_math::min(x, y), x.min(y));
        prop_assert_eq!(generic_math::dim(x, y), x.saturating_sub(y));

        let wide = x as u32 * y as u32 + z as u32;
        prop_assert_eq!(generic_math::fma(x, y, z), wide.min(u8::MAX as u32) as u8);
    }

    #[test]
    fn signed_abs_and_copysign_match_native(x in (i32::MIN + 1)..=i32::MAX, s in any::<i32>()) {
        prop_assert_eq!(generic_math::abs(x), x.abs());
        let expected = if s < 0 { -x.abs() } else { x.abs() };
        prop_assert_eq!(generic_math::copysign(x, s), expected);
    }

    #[test]
    fn same_kind_f32_ops_match_native(x in any::<f32>()) {
        let same = |a: f32, b: f32| (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits();
        prop_assert!(same(generic_math::floor(x), x.floor()));
        prop_assert!(same(generic_math::ceil(x), x.ceil()));
        prop_assert!(same(generic_math::trunc(x), x.trunc()));
        prop_assert!(same(generic_math::round(x), x.round()));
        prop_assert!(same(generic_math::abs(x), x.abs()));
    }

    #[test]
    fn narrowing_truncates_like_as_casts(x in -1.0e6f64..1.0e6) {
        prop_assert_eq!(i32::narrow(x), x as i32);
        prop_assert_eq!(u16::narrow(x), x as u16);
    }

    // ------------------------------------------------------------------------
    // NaN propagation
    // ------------------------------------------------------------------------

    #[test]
    fn nan_propagates_through_the_table(
        others in proptest::collection::vec(-1.0e3f64..1.0e3, 3),
        n in -4i32..4,
    ) {
        for &op in Operation::ALL.iter().filter(|op| op.propagates_nan()) {
            for slot in 0..op.arity() {
                let mut args = others[..op.arity()].to_vec();
                args[slot] = f64::NAN;
                let outcome = evaluate(op, &args, n).unwrap();
                prop_assert!(outcome.as_f64().is_nan(), "{} with NaN in slot {}", op, slot);
            }
        }
    }
}

#[test]
fn evaluation_with_nan_never_fails() {
    for &op in Operation::ALL {
        let args = vec![f64::NAN; op.arity()];
        assert!(evaluate(op, &args, 0).is_ok(), "{}", op);
    }
}
