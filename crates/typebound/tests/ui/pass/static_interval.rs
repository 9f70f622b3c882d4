use typebound::{
    constraint::{Bounded, CLOSED, ConstU16, OPEN},
    prelude::*,
};

type Port = BoundedType<u16, CLOSED, OPEN, ConstU16<1024>, ConstU16<49152>>;

const RANGE: Bounded<u16, CLOSED, OPEN, ConstU16<1024>, ConstU16<49152>> = Bounded::new_static();

fn main() {
    assert!(RANGE.test(&8080_u16));
    assert!(Port::with_default(8080).is_ok());
    assert!(Port::with_default(49152).is_err());
}
