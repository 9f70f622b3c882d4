use crate::{
    constraint::Constraint,
    error::ConstraintError,
    obs::{MetricsEvent, sink::record},
    verify::{RejectingVerifier, Verifier},
};
use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

///
/// Constrained
///
/// A value that always satisfies constraint `C`.
///
/// Every construction and every write runs `C::test`. A failing candidate is
/// handed to `V::verify` once and tested again; if it still fails the write is
/// rejected and the previously held value stays in place.
///
/// `V` defaults to [`RejectingVerifier`], so violations are rejected unless a
/// repairing verifier such as `ClampingVerifier` is chosen.
///

#[derive(Debug, Deref)]
pub struct Constrained<T, C, V = RejectingVerifier>
where
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    #[deref]
    value: T,
    constraint: C,
    _verifier: PhantomData<fn() -> V>,
}

impl<T, C, V> Constrained<T, C, V>
where
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    /// Guard `value` with `constraint`.
    pub fn new(value: T, constraint: C) -> Result<Self, ConstraintError<T>> {
        let value = Self::admit(value, &constraint)?;

        Ok(Self {
            value,
            constraint,
            _verifier: PhantomData,
        })
    }

    /// Guard `value` with a constraint that needs no runtime data.
    pub fn with_default(value: T) -> Result<Self, ConstraintError<T>>
    where
        C: Default,
    {
        Self::new(value, C::default())
    }

    #[must_use]
    pub const fn get_value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub const fn get_constraint(&self) -> &C {
        &self.constraint
    }

    /// Whether `value` would pass the constraint as-is, without verification.
    #[must_use]
    pub fn check(&self, value: &T) -> bool {
        self.constraint.test(value)
    }

    /// Replace the held value.
    pub fn set(&mut self, value: T) -> Result<(), ConstraintError<T>> {
        self.value = Self::admit(value, &self.constraint)?;

        Ok(())
    }

    /// Edit a copy of the held value and write it back through [`set`](Self::set).
    pub fn modify<F>(&mut self, f: F) -> Result<(), ConstraintError<T>>
    where
        T: Clone,
        F: FnOnce(&mut T),
    {
        let mut candidate = self.value.clone();
        f(&mut candidate);

        self.set(candidate)
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Split into the held value and its constraint.
    #[must_use]
    pub fn into_parts(self) -> (T, C) {
        (self.value, self.constraint)
    }

    // test, verify once, test again
    fn admit(mut value: T, constraint: &C) -> Result<T, ConstraintError<T>> {
        let kind = C::KIND;

        if constraint.test(&value) {
            record(MetricsEvent::Accepted { kind });
            return Ok(value);
        }

        V::verify(&mut value, constraint);

        if constraint.test(&value) {
            record(MetricsEvent::Repaired { kind });
            Ok(value)
        } else {
            record(MetricsEvent::Rejected { kind });
            Err(ConstraintError::new(kind, value))
        }
    }
}

impl<T, C, V> Clone for Constrained<T, C, V>
where
    T: Clone,
    C: Constraint<T> + Clone,
    V: Verifier<T, C>,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            constraint: self.constraint.clone(),
            _verifier: PhantomData,
        }
    }
}

impl<T, C, V> Copy for Constrained<T, C, V>
where
    T: Copy,
    C: Constraint<T> + Copy,
    V: Verifier<T, C>,
{
}

impl<T, C, V> PartialEq for Constrained<T, C, V>
where
    T: PartialEq,
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T, C, V> Eq for Constrained<T, C, V>
where
    T: Eq,
    C: Constraint<T>,
    V: Verifier<T, C>,
{
}

impl<T, C, V> PartialOrd for Constrained<T, C, V>
where
    T: PartialOrd,
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T, C, V> Ord for Constrained<T, C, V>
where
    T: Ord,
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T, C, V> Hash for Constrained<T, C, V>
where
    T: Hash,
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, C, V> Serialize for Constrained<T, C, V>
where
    T: Serialize,
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T, C, V> Deserialize<'de> for Constrained<T, C, V>
where
    T: Deserialize<'de>,
    C: Constraint<T> + Default,
    V: Verifier<T, C>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;

        Self::with_default(value).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
