#![allow(dead_code)]

use typebound::constraint::{Bounded, CLOSED, ConstI32, DynamicBound};

struct Mixed {
    interval: Bounded<i32, CLOSED, CLOSED, DynamicBound, ConstI32<10>>,
}

fn main() {}
