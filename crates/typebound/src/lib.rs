//! Values guarded by bounds predicates.
//!
//! ## Crate layout
//! - `constraint`: bound predicates (`<`, `<=`, `>`, `>=`) and intervals, each
//!   bound either stored per instance or carried in the type.
//! - `verify`: verifier strategies, including clamping and the free `clamp`.
//! - `constrained`: the holder that keeps a value inside its constraint.
//! - `make`: helpers that build bounded and clamped holders from three values.
//! - `error`: the rejection error handed back by the holder.
//! - `obs`: metrics events recorded on every check.
//!
//! ```
//! use typebound::prelude::*;
//!
//! let mut volume = make_clamped(150, 0, 100).unwrap();
//! assert_eq!(*volume, 100);
//!
//! volume.set(-20).unwrap();
//! assert_eq!(*volume, 0);
//! ```

pub mod constrained;
pub mod constraint;
pub mod error;
pub mod make;
pub mod obs;
pub mod verify;

// export so `static_bound!` expands the same inside and outside the crate
extern crate self as typebound;

pub(crate) use thiserror::Error as ThisError;

///
/// Prelude
///
/// Types, helpers and the two capability traits needed to work with guarded
/// values. Static bound markers are left in `constraint`.
///

pub mod prelude {
    pub use crate::{
        constrained::Constrained,
        constraint::{
            CLOSED, ClosedInterval, Constraint, DynamicBound, Greater, GreaterEqual, Less,
            LessEqual, OPEN, OpenInterval,
        },
        error::ConstraintError,
        make::{BoundedType, ClampedType, make_bounded, make_bounded_exclusive, make_clamped},
        verify::{ClampingVerifier, RejectingVerifier, Verifier, clamp},
    };
}
