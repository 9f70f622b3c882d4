use crate::{ThisError, constraint::ConstraintKind};

///
/// ConstraintError
///
/// A candidate failed its constraint and the verifier did not repair it.
/// The rejected value is handed back so the caller keeps ownership.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("value rejected by {kind} constraint")]
pub struct ConstraintError<T> {
    pub kind: ConstraintKind,
    pub value: T,
}

impl<T> ConstraintError<T> {
    #[must_use]
    pub const fn new(kind: ConstraintKind, value: T) -> Self {
        Self { kind, value }
    }

    /// Take back the rejected value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}
