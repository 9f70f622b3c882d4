use crate::constraint::ConstraintKind;

///
/// Relation
///
/// One of the four ordering tests a bound predicate applies, written
/// `value <op> bound`.
///

pub trait Relation: Copy + Default + 'static {
    const KIND: ConstraintKind;
    const SYMBOL: &'static str;

    fn holds<U, T>(value: &U, bound: &T) -> bool
    where
        U: PartialOrd<T> + ?Sized,
        T: ?Sized;
}

// relation
macro_rules! relation {
    ($name:ident, $kind:ident, $symbol:literal, $method:ident) => {
        #[doc = concat!("`value ", $symbol, " bound`")]
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        pub struct $name;

        impl Relation for $name {
            const KIND: ConstraintKind = ConstraintKind::$kind;
            const SYMBOL: &'static str = $symbol;

            fn holds<U, T>(value: &U, bound: &T) -> bool
            where
                U: PartialOrd<T> + ?Sized,
                T: ?Sized,
            {
                value.$method(bound)
            }
        }
    };
}

relation!(Lt, Less, "<", lt);
relation!(Le, LessEqual, "<=", le);
relation!(Gt, Greater, ">", gt);
relation!(Ge, GreaterEqual, ">=", ge);

///
/// Side
///
/// Type-level inclusivity flag used to pick the relation of each interval side.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Side<const INCLUSIVE: bool>;

/// Relation for the lower side of an interval: `>=` when closed, `>` when open.
pub trait LowerSide {
    type Op: Relation;
}

/// Relation for the upper side of an interval: `<=` when closed, `<` when open.
pub trait UpperSide {
    type Op: Relation;
}

impl LowerSide for Side<true> {
    type Op = Ge;
}

impl LowerSide for Side<false> {
    type Op = Gt;
}

impl UpperSide for Side<true> {
    type Op = Le;
}

impl UpperSide for Side<false> {
    type Op = Lt;
}
