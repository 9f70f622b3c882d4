use crate::constraint::{
    BoundRepr, Compare, Constraint, ConstraintKind, DynamicBound, Edge, LowerSide, MatchingRepr,
    Side, StaticBound, UpperSide,
};
use std::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
};

/// Inclusivity flag for a side that excludes its bound.
pub const OPEN: bool = false;

/// Inclusivity flag for a side that includes its bound.
pub const CLOSED: bool = true;

/// Lower side of an interval: `GreaterEqual` when inclusive, `Greater` otherwise.
pub type LowerBound<T, const INCLUSIVE: bool, B = DynamicBound> =
    Compare<T, <Side<INCLUSIVE> as LowerSide>::Op, B>;

/// Upper side of an interval: `LessEqual` when inclusive, `Less` otherwise.
pub type UpperBound<T, const INCLUSIVE: bool, B = DynamicBound> =
    Compare<T, <Side<INCLUSIVE> as UpperSide>::Op, B>;

///
/// Bounded
///
/// Two-sided bound predicate. A value passes when it satisfies both the lower
/// and the upper side; `LOWER_INCLUSIVE` / `UPPER_INCLUSIVE` decide whether
/// each bound itself is valid.
///
/// `L` and `U` select the representation of each bound and must agree: both
/// [`DynamicBound`] (built with [`Bounded::new`]) or both static markers with
/// value type `T` (built with [`Bounded::new_static`]). Mixing is rejected when
/// the type is named.
///
/// ```compile_fail
/// use typebound::constraint::{Bounded, ConstI32, DynamicBound, CLOSED};
///
/// // mixed static and dynamic bounds are unsupported
/// let _ = Bounded::<i32, CLOSED, CLOSED, DynamicBound, ConstI32<10>>::default();
/// ```
///

pub struct Bounded<
    T,
    const LOWER_INCLUSIVE: bool,
    const UPPER_INCLUSIVE: bool,
    L = DynamicBound,
    U = DynamicBound,
> where
    Side<LOWER_INCLUSIVE>: LowerSide,
    Side<UPPER_INCLUSIVE>: UpperSide,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
{
    lower: LowerBound<T, LOWER_INCLUSIVE, L>,
    upper: UpperBound<T, UPPER_INCLUSIVE, U>,
}

/// Valid when the value lies strictly between the two bounds.
pub type OpenInterval<T, L = DynamicBound, U = DynamicBound> = Bounded<T, OPEN, OPEN, L, U>;

/// Valid when the value lies between the two bounds or equals one of them.
pub type ClosedInterval<T, L = DynamicBound, U = DynamicBound> = Bounded<T, CLOSED, CLOSED, L, U>;

impl<T, const LI: bool, const UI: bool> Bounded<T, LI, UI, DynamicBound, DynamicBound>
where
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
{
    /// Build an interval around two runtime bounds.
    ///
    /// The bounds are not checked against each other; `lower > upper` yields
    /// an interval no value satisfies.
    #[must_use]
    pub const fn new(lower: T, upper: T) -> Self {
        Self {
            lower: Compare::new(lower),
            upper: Compare::new(upper),
        }
    }

    /// Consume the interval and return `(lower, upper)`.
    #[must_use]
    pub fn into_bounds(self) -> (T, T) {
        (self.lower.into_bound(), self.upper.into_bound())
    }
}

impl<T, const LI: bool, const UI: bool, L, U> Bounded<T, LI, UI, L, U>
where
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: StaticBound<Value = T>,
    U: StaticBound<Value = T>,
{
    /// Build an interval whose bounds are `L::VALUE` and `U::VALUE`.
    #[must_use]
    pub const fn new_static() -> Self {
        Self {
            lower: Compare::new_static(),
            upper: Compare::new_static(),
        }
    }
}

impl<T, const LI: bool, const UI: bool, L, U> Bounded<T, LI, UI, L, U>
where
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
{
    pub const LOWER_INCLUSIVE: bool = LI;
    pub const UPPER_INCLUSIVE: bool = UI;
    pub const IS_DYNAMIC: bool = L::IS_DYNAMIC;

    #[must_use]
    pub fn get_lower_bound(&self) -> &T {
        self.lower.get_bound()
    }

    #[must_use]
    pub fn get_upper_bound(&self) -> &T {
        self.upper.get_bound()
    }

    /// Lower side predicate.
    #[must_use]
    pub const fn lower(&self) -> &LowerBound<T, LI, L> {
        &self.lower
    }

    /// Upper side predicate.
    #[must_use]
    pub const fn upper(&self) -> &UpperBound<T, UI, U> {
        &self.upper
    }

    /// Run the predicate; same as [`Constraint::test`] without naming the trait.
    pub fn test<V>(&self, value: &V) -> bool
    where
        V: PartialOrd<T> + ?Sized,
    {
        self.lower.test(value) && self.upper.test(value)
    }
}

impl<T, V, const LI: bool, const UI: bool, L, U> Constraint<V> for Bounded<T, LI, UI, L, U>
where
    V: PartialOrd<T> + ?Sized,
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
{
    const KIND: ConstraintKind = ConstraintKind::Interval {
        lower: Edge::from_inclusive(LI),
        upper: Edge::from_inclusive(UI),
    };

    fn test(&self, value: &V) -> bool {
        self.lower.test(value) && self.upper.test(value)
    }
}

impl<T, const LI: bool, const UI: bool, L, U> Clone for Bounded<T, LI, UI, L, U>
where
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
    L::Storage: Clone,
    U::Storage: Clone,
{
    fn clone(&self) -> Self {
        Self {
            lower: self.lower.clone(),
            upper: self.upper.clone(),
        }
    }
}

impl<T, const LI: bool, const UI: bool, L, U> Copy for Bounded<T, LI, UI, L, U>
where
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
    L::Storage: Copy,
    U::Storage: Copy,
{
}

impl<T, const LI: bool, const UI: bool, L, U> Default for Bounded<T, LI, UI, L, U>
where
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: StaticBound<Value = T>,
    U: StaticBound<Value = T>,
{
    fn default() -> Self {
        Self::new_static()
    }
}

impl<T, const LI: bool, const UI: bool, L, U> Debug for Bounded<T, LI, UI, L, U>
where
    T: Debug,
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bounded")
            .field("lower", self.get_lower_bound())
            .field("lower_inclusive", &LI)
            .field("upper", self.get_upper_bound())
            .field("upper_inclusive", &UI)
            .finish()
    }
}

impl<T, const LI: bool, const UI: bool, L, U> PartialEq for Bounded<T, LI, UI, L, U>
where
    T: PartialEq,
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.get_lower_bound() == other.get_lower_bound()
            && self.get_upper_bound() == other.get_upper_bound()
    }
}

impl<T, const LI: bool, const UI: bool, L, U> Eq for Bounded<T, LI, UI, L, U>
where
    T: Eq,
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
{
}

impl<T, const LI: bool, const UI: bool, L, U> Hash for Bounded<T, LI, UI, L, U>
where
    T: Hash,
    Side<LI>: LowerSide,
    Side<UI>: UpperSide,
    L: BoundRepr<T> + MatchingRepr<U>,
    U: BoundRepr<T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get_lower_bound().hash(state);
        self.get_upper_bound().hash(state);
    }
}

///
/// TESTS
///
