use crate::constraint::{
    Bounded, CLOSED, ClosedInterval, ConstI64, Constraint, ConstraintKind, Greater, GreaterEqual,
    Less, LessEqual, OPEN, OpenInterval,
};
use proptest::prelude::*;

fn arb_ordered_pair() -> impl Strategy<Value = (i64, i64)> {
    (-1_000_i64..1_000, 0_i64..500).prop_map(|(lo, width)| (lo, lo + width))
}

fn arb_candidate() -> impl Strategy<Value = i64> {
    prop_oneof![-1_600_i64..1_600, Just(i64::MIN), Just(i64::MAX)]
}

// evaluates through the trait so the generic `Constraint<V>` path is covered
fn check<C: Constraint<i64>>(constraint: &C, value: i64) -> bool {
    constraint.test(&value)
}

#[test]
fn kind_slots_are_dense_and_distinct() {
    for (i, kind) in ConstraintKind::ALL.into_iter().enumerate() {
        assert_eq!(kind.slot(), i, "{kind}");
    }

    assert_eq!(<Bounded<i64, OPEN, CLOSED> as Constraint<i64>>::KIND.slot(), 5);
    assert_eq!(<Bounded<i64, CLOSED, OPEN> as Constraint<i64>>::KIND.slot(), 6);
}

proptest! {
    #[test]
    fn interval_matches_its_inclusivity_formula(
        (lo, hi) in arb_ordered_pair(),
        v in arb_candidate(),
    ) {
        prop_assert_eq!(
            check(&Bounded::<i64, CLOSED, CLOSED>::new(lo, hi), v),
            lo <= v && v <= hi
        );
        prop_assert_eq!(
            check(&Bounded::<i64, CLOSED, OPEN>::new(lo, hi), v),
            lo <= v && v < hi
        );
        prop_assert_eq!(
            check(&Bounded::<i64, OPEN, CLOSED>::new(lo, hi), v),
            lo < v && v <= hi
        );
        prop_assert_eq!(
            check(&Bounded::<i64, OPEN, OPEN>::new(lo, hi), v),
            lo < v && v < hi
        );
    }

    #[test]
    fn interval_is_the_intersection_of_its_sides(
        (lo, hi) in arb_ordered_pair(),
        v in arb_candidate(),
    ) {
        let closed = ClosedInterval::new(lo, hi);
        prop_assert_eq!(
            closed.test(&v),
            GreaterEqual::new(lo).test(&v) && LessEqual::new(hi).test(&v)
        );

        let open = OpenInterval::new(lo, hi);
        prop_assert_eq!(
            open.test(&v),
            Greater::new(lo).test(&v) && Less::new(hi).test(&v)
        );
    }

    #[test]
    fn bounds_pass_only_on_inclusive_sides((lo, hi) in arb_ordered_pair()) {
        let closed = ClosedInterval::new(lo, hi);
        prop_assert!(closed.test(closed.get_lower_bound()));
        prop_assert!(closed.test(closed.get_upper_bound()));

        let open = OpenInterval::new(lo, hi);
        prop_assert!(!open.test(open.get_lower_bound()));
        prop_assert!(!open.test(open.get_upper_bound()));

        let lower_only = Bounded::<i64, CLOSED, OPEN>::new(lo, hi);
        prop_assert!(lower_only.test(lower_only.get_lower_bound()) || lo == hi);
        prop_assert!(!lower_only.test(lower_only.get_upper_bound()));
    }

    #[test]
    fn static_and_dynamic_intervals_agree(v in arb_candidate()) {
        let fixed = ClosedInterval::<i64, ConstI64<-10>, ConstI64<10>>::new_static();
        let runtime = ClosedInterval::new(-10_i64, 10);

        prop_assert_eq!(fixed.test(&v), runtime.test(&v));
        prop_assert_eq!(fixed.get_lower_bound(), runtime.get_lower_bound());
        prop_assert_eq!(fixed.get_upper_bound(), runtime.get_upper_bound());
    }

    #[test]
    fn single_bounds_match_their_operator(bound in arb_candidate(), v in arb_candidate()) {
        prop_assert_eq!(check(&Less::new(bound), v), v < bound);
        prop_assert_eq!(check(&LessEqual::new(bound), v), v <= bound);
        prop_assert_eq!(check(&Greater::new(bound), v), v > bound);
        prop_assert_eq!(check(&GreaterEqual::new(bound), v), v >= bound);
    }
}
