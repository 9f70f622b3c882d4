use crate::constraint::{
    BoundRepr, Constraint, ConstraintKind, DynamicBound, Ge, Gt, Le, Lt, Relation, StaticBound,
};
use std::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

///
/// Compare
///
/// Single-sided bound predicate: a value passes when `value <Op> bound`.
///
/// With `B = DynamicBound` the bound is stored in the predicate and supplied
/// to [`Compare::new`]. With a [`StaticBound`] marker nothing is stored and the
/// predicate is built with [`Compare::new_static`] or `Default`.
///
/// Prefer the aliases [`Less`], [`LessEqual`], [`Greater`], [`GreaterEqual`].
///
/// A static predicate takes no bound argument:
///
/// ```compile_fail
/// use typebound::constraint::{ConstI32, LessEqual};
///
/// let _ = LessEqual::<i32, ConstI32<10>>::new(10);
/// ```
///
/// and a dynamic predicate cannot be built without one:
///
/// ```compile_fail
/// use typebound::constraint::LessEqual;
///
/// let _ = LessEqual::<i32>::default();
/// ```
///

pub struct Compare<T, Op, B = DynamicBound>
where
    B: BoundRepr<T>,
{
    bound: B::Storage,
    _marker: PhantomData<fn() -> (T, Op)>,
}

/// Valid when the value is less than the bound.
pub type Less<T, B = DynamicBound> = Compare<T, Lt, B>;

/// Valid when the value is less than or equal to the bound.
pub type LessEqual<T, B = DynamicBound> = Compare<T, Le, B>;

/// Valid when the value is greater than the bound.
pub type Greater<T, B = DynamicBound> = Compare<T, Gt, B>;

/// Valid when the value is greater than or equal to the bound.
pub type GreaterEqual<T, B = DynamicBound> = Compare<T, Ge, B>;

impl<T, Op> Compare<T, Op, DynamicBound> {
    /// Build a predicate around a runtime bound.
    #[must_use]
    pub const fn new(bound: T) -> Self {
        Self {
            bound,
            _marker: PhantomData,
        }
    }

    /// Consume the predicate and return its bound.
    #[must_use]
    pub fn into_bound(self) -> T {
        self.bound
    }
}

impl<T, Op, S> Compare<T, Op, S>
where
    S: StaticBound<Value = T>,
{
    /// Build a predicate whose bound is `S::VALUE`.
    #[must_use]
    pub const fn new_static() -> Self {
        Self {
            bound: (),
            _marker: PhantomData,
        }
    }
}

impl<T, Op, B> Compare<T, Op, B>
where
    B: BoundRepr<T>,
{
    /// Whether the bound is stored per instance.
    pub const IS_DYNAMIC: bool = B::IS_DYNAMIC;

    #[must_use]
    pub fn get_bound(&self) -> &T {
        B::bound(&self.bound)
    }
}

impl<T, Op, B> Compare<T, Op, B>
where
    Op: Relation,
    B: BoundRepr<T>,
{
    /// Run the predicate; same as [`Constraint::test`] without naming the trait.
    pub fn test<U>(&self, value: &U) -> bool
    where
        U: PartialOrd<T> + ?Sized,
    {
        Op::holds(value, self.get_bound())
    }
}

impl<T, U, Op, B> Constraint<U> for Compare<T, Op, B>
where
    U: PartialOrd<T> + ?Sized,
    Op: Relation,
    B: BoundRepr<T>,
{
    const KIND: ConstraintKind = Op::KIND;

    fn test(&self, value: &U) -> bool {
        Op::holds(value, self.get_bound())
    }
}

impl<T, Op, B> Clone for Compare<T, Op, B>
where
    B: BoundRepr<T>,
    B::Storage: Clone,
{
    fn clone(&self) -> Self {
        Self {
            bound: self.bound.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, Op, B> Copy for Compare<T, Op, B>
where
    B: BoundRepr<T>,
    B::Storage: Copy,
{
}

impl<T, Op, S> Default for Compare<T, Op, S>
where
    S: StaticBound<Value = T>,
{
    fn default() -> Self {
        Self::new_static()
    }
}

impl<T, Op, B> Debug for Compare<T, Op, B>
where
    T: Debug,
    Op: Relation,
    B: BoundRepr<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compare")
            .field("op", &Op::SYMBOL)
            .field("bound", self.get_bound())
            .field("dynamic", &B::IS_DYNAMIC)
            .finish()
    }
}

impl<T, Op, B> PartialEq for Compare<T, Op, B>
where
    T: PartialEq,
    B: BoundRepr<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.get_bound() == other.get_bound()
    }
}

impl<T, Op, B> Eq for Compare<T, Op, B>
where
    T: Eq,
    B: BoundRepr<T>,
{
}

impl<T, Op, B> Hash for Compare<T, Op, B>
where
    T: Hash,
    B: BoundRepr<T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get_bound().hash(state);
    }
}

///
/// TESTS
///
