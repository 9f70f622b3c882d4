use typebound::{constraint::ConstI32, prelude::*};

type Ceiling = Constrained<i32, LessEqual<i32, ConstI32<10>>, ClampingVerifier>;
type Floor = Constrained<i32, GreaterEqual<i32>, ClampingVerifier>;

fn main() {
    assert_eq!(*Ceiling::with_default(20).unwrap(), 10);
    assert_eq!(*Floor::new(-5, GreaterEqual::new(0)).unwrap(), 0);
    assert_eq!(*make_clamped(7_u8, 1, 5).unwrap(), 5);
}
