use crate::{
    constraint::{BoundRepr, Bounded, CLOSED, GreaterEqual, LessEqual, MatchingRepr},
    verify::Verifier,
};

///
/// clamp
///
/// Moves `value` into the closed `interval`: below the lower bound it becomes
/// the lower bound, above the upper bound it becomes the upper bound, and
/// anything else (including a value equal to a bound) is left alone.
///
/// The bound type only has to convert into the value type.
///
/// ```
/// use typebound::prelude::*;
///
/// let percent = ClosedInterval::new(0_u8, 100);
/// let mut wide = 250_u32;
///
/// clamp(&percent, &mut wide);
/// assert_eq!(wide, 100);
/// ```
///
/// Only closed intervals can be clamped into:
///
/// ```compile_fail
/// use typebound::prelude::*;
///
/// let mut v = 0;
/// clamp(&OpenInterval::new(1, 10), &mut v);
/// ```
///

pub fn clamp<T, V, L, U>(interval: &Bounded<T, CLOSED, CLOSED, L, U>, value: &mut V)
where
    T: Clone + Into<V>,
    V: PartialOrd,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
{
    let lower: V = interval.get_lower_bound().clone().into();
    if *value < lower {
        *value = lower;
        return;
    }

    let upper: V = interval.get_upper_bound().clone().into();
    if *value > upper {
        *value = upper;
    }
}

///
/// ClampingVerifier
///
/// Repairs a violation by replacing the value with the nearest valid bound.
/// Only defined for inclusive shapes; an excluded bound is itself invalid, so
/// pairing this verifier with `Less`, `Greater` or an open side fails to
/// compile.
///
/// ```compile_fail
/// use typebound::prelude::*;
///
/// let _ = Constrained::<i32, Less<i32>, ClampingVerifier>::new(5, Less::new(10));
/// ```
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ClampingVerifier;

impl<V, T, B> Verifier<V, LessEqual<T, B>> for ClampingVerifier
where
    V: PartialOrd<T>,
    T: Clone + Into<V>,
    B: BoundRepr<T>,
{
    fn verify(value: &mut V, constraint: &LessEqual<T, B>) {
        if !constraint.test(&*value) {
            *value = constraint.get_bound().clone().into();
        }
    }
}

impl<V, T, B> Verifier<V, GreaterEqual<T, B>> for ClampingVerifier
where
    V: PartialOrd<T>,
    T: Clone + Into<V>,
    B: BoundRepr<T>,
{
    fn verify(value: &mut V, constraint: &GreaterEqual<T, B>) {
        if !constraint.test(&*value) {
            *value = constraint.get_bound().clone().into();
        }
    }
}

impl<V, T, L, U> Verifier<V, Bounded<T, CLOSED, CLOSED, L, U>> for ClampingVerifier
where
    V: PartialOrd,
    T: Clone + Into<V>,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
{
    fn verify(value: &mut V, constraint: &Bounded<T, CLOSED, CLOSED, L, U>) {
        clamp(constraint, value);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{ClosedInterval, ConstI32, Constraint};
    use proptest::prelude::*;

    // ---------------------
    // clamp
    // ---------------------

    #[test]
    fn clamp_moves_out_of_range_values_to_the_nearest_bound() {
        let interval = ClosedInterval::new(10_i32, 20);

        let cases = [(5, 10), (25, 20), (15, 15), (10, 10), (20, 20)];
        for (input, expected) in cases {
            let mut v = input;
            clamp(&interval, &mut v);
            assert_eq!(v, expected, "clamp({input}) into [10, 20]");
        }
    }

    #[test]
    fn clamp_handles_negative_ranges() {
        let interval = ClosedInterval::new(-10_i32, -5);

        let cases = [(-20, -10), (-7, -7), (-5, -5), (0, -5)];
        for (input, expected) in cases {
            let mut v = input;
            clamp(&interval, &mut v);
            assert_eq!(v, expected, "clamp({input}) into [-10, -5]");
        }
    }

    #[test]
    fn clamp_converts_bounds_into_a_wider_value_type() {
        let interval = ClosedInterval::new(-1_i8, 1);

        let mut v = -300_i64;
        clamp(&interval, &mut v);
        assert_eq!(v, -1);

        let mut w = 0.5_f64;
        clamp(&ClosedInterval::new(1.0_f32, 2.0), &mut w);
        assert!((w - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clamp_leaves_nan_untouched() {
        let mut v = f64::NAN;
        clamp(&ClosedInterval::new(0.0_f64, 1.0), &mut v);

        assert!(v.is_nan());
    }

    #[test]
    fn clamp_into_static_interval() {
        let interval = ClosedInterval::<i32, ConstI32<0>, ConstI32<100>>::new_static();

        let mut v = 150_i32;
        clamp(&interval, &mut v);
        assert_eq!(v, 100);
    }

    // ---------------------
    // ClampingVerifier
    // ---------------------

    #[test]
    fn verifier_lowers_values_above_less_equal() {
        let p = LessEqual::new(10_i32);

        let mut v = 42;
        ClampingVerifier::verify(&mut v, &p);
        assert_eq!(v, 10);

        let mut w = 3;
        ClampingVerifier::verify(&mut w, &p);
        assert_eq!(w, 3);
    }

    #[test]
    fn verifier_raises_values_below_greater_equal() {
        let p = GreaterEqual::new(-1_i32);

        let mut v = -42;
        ClampingVerifier::verify(&mut v, &p);
        assert_eq!(v, -1);

        let mut w = -1;
        ClampingVerifier::verify(&mut w, &p);
        assert_eq!(w, -1);
    }

    #[test]
    fn verifier_clamps_closed_intervals() {
        let p = ClosedInterval::new(0_i32, 100);

        for (input, expected) in [(150, 100), (-20, 0), (42, 42)] {
            let mut v = input;
            ClampingVerifier::verify(&mut v, &p);
            assert_eq!(v, expected);
        }
    }

    // ---------------------
    // Properties
    // ---------------------

    fn arb_interval() -> impl Strategy<Value = (i32, i32)> {
        (-10_000_i32..10_000, 0_i32..5_000).prop_map(|(lo, width)| (lo, lo + width))
    }

    proptest! {
        #[test]
        fn clamp_result_lies_within_bounds((lo, hi) in arb_interval(), v in any::<i32>()) {
            let interval = ClosedInterval::new(lo, hi);
            let mut r = v;
            clamp(&interval, &mut r);

            prop_assert!(lo <= r && r <= hi);
            if (lo..=hi).contains(&v) {
                prop_assert_eq!(r, v);
            } else if v < lo {
                prop_assert_eq!(r, lo);
            } else {
                prop_assert_eq!(r, hi);
            }
        }

        #[test]
        fn clamp_is_idempotent((lo, hi) in arb_interval(), v in any::<i32>()) {
            let interval = ClosedInterval::new(lo, hi);
            let mut once = v;
            clamp(&interval, &mut once);
            let mut twice = once;
            clamp(&interval, &mut twice);

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn verify_restores_the_constraint((lo, hi) in arb_interval(), v in any::<i32>()) {
            let interval = ClosedInterval::new(lo, hi);
            let upper = LessEqual::new(hi);
            let lower = GreaterEqual::new(lo);

            let mut a = v;
            ClampingVerifier::verify(&mut a, &interval);
            prop_assert!(Constraint::<i32>::test(&interval, &a));

            let mut b = v;
            ClampingVerifier::verify(&mut b, &upper);
            prop_assert!(upper.test(&b));
            prop_assert_eq!(b, v.min(hi));

            let mut c = v;
            ClampingVerifier::verify(&mut c, &lower);
            prop_assert!(lower.test(&c));
            prop_assert_eq!(c, v.max(lo));

            if interval.test(&v) {
                prop_assert_eq!(a, v);
            }
        }
    }
}
