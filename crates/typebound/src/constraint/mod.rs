//! Bounds predicates.
//!
//! Every predicate compares a candidate against one or two bounds. A bound is
//! either *dynamic* (owned by the predicate, supplied at construction) or
//! *static* (encoded in the predicate's type through a [`StaticBound`] marker,
//! so the predicate is zero-sized). The choice is made with the `B` type
//! parameter: [`DynamicBound`] or a static marker such as
//! [`ConstI32<0>`](ConstI32).

mod bound;
mod constant;
mod interval;
mod relation;

#[cfg(test)]
mod tests;

pub use bound::*;
pub use constant::*;
pub use interval::*;
pub use relation::*;

use derive_more::Display;
use serde::Serialize;

///
/// Constraint
///
/// Capability shared by every predicate: a pure test of one candidate.
/// `U` is the candidate type, which only has to be comparable with the bound.
///

pub trait Constraint<U: ?Sized> {
    /// Shape of this predicate, reported with rejections and metrics.
    const KIND: ConstraintKind;

    fn test(&self, value: &U) -> bool;
}

///
/// ConstraintKind
///
/// Predicate shape, independent of the bound values.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum ConstraintKind {
    #[display("less")]
    Less,

    #[display("less_equal")]
    LessEqual,

    #[display("greater")]
    Greater,

    #[display("greater_equal")]
    GreaterEqual,

    #[display("interval({lower}, {upper})")]
    Interval { lower: Edge, upper: Edge },
}

impl ConstraintKind {
    /// Number of distinct shapes.
    pub const COUNT: usize = 8;

    /// Every shape, ordered by [`slot`](Self::slot).
    pub const ALL: [Self; Self::COUNT] = [
        Self::Less,
        Self::LessEqual,
        Self::Greater,
        Self::GreaterEqual,
        Self::Interval {
            lower: Edge::Open,
            upper: Edge::Open,
        },
        Self::Interval {
            lower: Edge::Open,
            upper: Edge::Closed,
        },
        Self::Interval {
            lower: Edge::Closed,
            upper: Edge::Open,
        },
        Self::Interval {
            lower: Edge::Closed,
            upper: Edge::Closed,
        },
    ];

    /// Dense index in `0..COUNT`.
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Self::Less => 0,
            Self::LessEqual => 1,
            Self::Greater => 2,
            Self::GreaterEqual => 3,
            Self::Interval { lower, upper } => match (lower, upper) {
                (Edge::Open, Edge::Open) => 4,
                (Edge::Open, Edge::Closed) => 5,
                (Edge::Closed, Edge::Open) => 6,
                (Edge::Closed, Edge::Closed) => 7,
            },
        }
    }
}

///
/// Edge
///
/// Whether a bound value itself satisfies the predicate.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Edge {
    #[display("open")]
    Open,

    #[display("closed")]
    Closed,
}

impl Edge {
    #[must_use]
    pub const fn from_inclusive(inclusive: bool) -> Self {
        if inclusive { Self::Closed } else { Self::Open }
    }

    #[must_use]
    pub const fn is_inclusive(self) -> bool {
        matches!(self, Self::Closed)
    }
}

///
/// DynamicBound
///
/// Marker selecting per-instance storage for a bound.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DynamicBound;

///
/// StaticBound
///
/// A bound known at compile time. Implementors are zero-sized markers; the
/// value lives in `VALUE`. Use the `Const*` markers for integers and `char`,
/// and [`static_bound!`](crate::static_bound) for anything else.
///

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a static bound",
    label = "expected a static bound marker here",
    note = "this constructor requires a static bound; predicates over `DynamicBound` are built with `new`"
)]
pub trait StaticBound: Copy + Default + 'static {
    type Value: 'static;

    const VALUE: &'static Self::Value;
}

///
/// BoundRepr
///
/// Storage strategy for a bound of type `T`: `T` itself for [`DynamicBound`],
/// nothing for a [`StaticBound`].
///

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot hold a bound of type `{T}`",
    label = "expected `DynamicBound` or a static bound whose value is `{T}`"
)]
pub trait BoundRepr<T> {
    const IS_DYNAMIC: bool;

    type Storage;

    fn bound(storage: &Self::Storage) -> &T;
}

impl<T> BoundRepr<T> for DynamicBound {
    const IS_DYNAMIC: bool = true;

    type Storage = T;

    fn bound(storage: &T) -> &T {
        storage
    }
}

#[diagnostic::do_not_recommend]
impl<T, S> BoundRepr<T> for S
where
    S: StaticBound<Value = T>,
{
    const IS_DYNAMIC: bool = false;

    type Storage = ();

    fn bound(_: &()) -> &T {
        S::VALUE
    }
}

///
/// MatchingRepr
///
/// Holds when two bounds use the same representation: both dynamic or both
/// static.
///

#[diagnostic::on_unimplemented(
    message = "mixed static and dynamic bounds are unsupported",
    label = "`{Self}` and `{Other}` must both be `DynamicBound` or both be static bounds"
)]
pub trait MatchingRepr<Other> {}

impl MatchingRepr<DynamicBound> for DynamicBound {}

#[diagnostic::do_not_recommend]
impl<A, B> MatchingRepr<B> for A
where
    A: StaticBound,
    B: StaticBound,
{
}
