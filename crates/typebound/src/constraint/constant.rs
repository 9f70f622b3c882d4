use crate::constraint::StaticBound;

// const_bounds
// one zero-sized marker per primitive that can be a const generic parameter
macro_rules! const_bounds {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Static `", stringify!($ty), "` bound fixed by the const parameter `N`.")]
            #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
            pub struct $name<const N: $ty>;

            impl<const N: $ty> StaticBound for $name<N> {
                type Value = $ty;

                const VALUE: &'static $ty = &N;
            }
        )*
    };
}

const_bounds!(
    ConstI8 => i8,
    ConstI16 => i16,
    ConstI32 => i32,
    ConstI64 => i64,
    ConstI128 => i128,
    ConstIsize => isize,
    ConstU8 => u8,
    ConstU16 => u16,
    ConstU32 => u32,
    ConstU64 => u64,
    ConstU128 => u128,
    ConstUsize => usize,
    ConstChar => char,
);

///
/// static_bound
///
/// Declares a zero-sized [`StaticBound`] marker for a value whose type cannot
/// be a const generic parameter (floats, user types with `const` constructors).
///
/// ```
/// use typebound::{constraint::LessEqual, static_bound};
///
/// static_bound!(pub Unit: f64 = 1.0);
///
/// let at_most_one = LessEqual::<f64, Unit>::new_static();
/// assert_eq!(*at_most_one.get_bound(), 1.0);
/// ```
///

#[macro_export]
macro_rules! static_bound {
    ($(#[$meta:meta])* $vis:vis $name:ident : $ty:ty = $value:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        $vis struct $name;

        impl $crate::constraint::StaticBound for $name {
            type Value = $ty;

            const VALUE: &'static $ty = &$value;
        }
    };
}
