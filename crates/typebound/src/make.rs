//! Convenience builders for the common holder shapes.
//!
//! All three helpers take the value and both bounds as the same type `T`, so
//! a mismatch is a compile error rather than a silent conversion:
//!
//! ```compile_fail
//! use typebound::prelude::*;
//!
//! let _ = make_bounded(5_i32, 1_i64, 10);
//! ```

use crate::{
    constrained::Constrained,
    constraint::{Bounded, CLOSED, ClosedInterval, DynamicBound, OPEN, OpenInterval},
    error::ConstraintError,
    verify::ClampingVerifier,
};

///
/// BoundedType
///
/// A holder over an interval with the given edge flags. Violations are
/// rejected.
///

pub type BoundedType<
    T,
    const LOWER_INCLUSIVE: bool,
    const UPPER_INCLUSIVE: bool,
    L = DynamicBound,
    U = DynamicBound,
> = Constrained<T, Bounded<T, LOWER_INCLUSIVE, UPPER_INCLUSIVE, L, U>>;

///
/// ClampedType
///
/// A holder over a closed interval that clamps violations onto the nearest
/// bound.
///

pub type ClampedType<T, L = DynamicBound, U = DynamicBound> =
    Constrained<T, ClosedInterval<T, L, U>, ClampingVerifier>;

/// Hold `value` inside `[lower, upper]`.
pub fn make_bounded<T>(
    value: T,
    lower: T,
    upper: T,
) -> Result<BoundedType<T, CLOSED, CLOSED>, ConstraintError<T>>
where
    T: PartialOrd,
{
    Constrained::new(value, ClosedInterval::new(lower, upper))
}

/// Hold `value` inside `(lower, upper)`.
pub fn make_bounded_exclusive<T>(
    value: T,
    lower: T,
    upper: T,
) -> Result<BoundedType<T, OPEN, OPEN>, ConstraintError<T>>
where
    T: PartialOrd,
{
    Constrained::new(value, OpenInterval::new(lower, upper))
}

/// Hold `value` inside `[lower, upper]`, clamping it there if needed.
///
/// Fails only when clamping cannot produce a valid value, which happens for
/// `lower > upper` and for unordered values such as NaN.
pub fn make_clamped<T>(value: T, lower: T, upper: T) -> Result<ClampedType<T>, ConstraintError<T>>
where
    T: PartialOrd + Clone,
{
    Constrained::new(value, ClosedInterval::new(lower, upper))
}

///
/// TESTS
///
