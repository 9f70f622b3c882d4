//! Verifier strategies.
//!
//! A verifier decides what happens to a candidate that fails its constraint.
//! The holder calls [`Verifier::verify`] once per failed check and re-tests
//! the candidate afterwards; anything still failing is rejected.

mod clamp;

pub use clamp::*;

///
/// Verifier
///
/// Stateless repair strategy for values failing constraint `C`.
///

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot repair values guarded by `{C}`",
    label = "unsupported verifier for this constraint",
    note = "clamping requires an inclusive bound: `LessEqual`, `GreaterEqual` or `ClosedInterval`"
)]
pub trait Verifier<V, C: ?Sized> {
    fn verify(value: &mut V, constraint: &C);
}

///
/// RejectingVerifier
///
/// Leaves the candidate untouched, so every violation is rejected by the
/// holder. Works with any constraint.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RejectingVerifier;

impl<V, C: ?Sized> Verifier<V, C> for RejectingVerifier {
    fn verify(_: &mut V, _: &C) {}
}
