use crate::constraint::ConstraintKind;
use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for constraint checks on this thread.
/// Per-kind counters sit in a fixed array indexed by `ConstraintKind::slot`.
///

#[derive(Clone, Debug, Default)]
pub struct EventState {
    pub ops: EventOps,
    pub kinds: [KindCounters; ConstraintKind::COUNT],
}

impl EventState {
    pub(crate) const fn kind_mut(&mut self, kind: ConstraintKind) -> &mut KindCounters {
        &mut self.kinds[kind.slot()]
    }
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Checks that passed on the first test
    pub accepted: u64,

    // Checks the verifier turned into a pass
    pub repaired: u64,

    // Checks that still failed after verification
    pub rejected: u64,
}

///
/// KindCounters
/// Same counters, split by constraint shape.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct KindCounters {
    pub accepted: u64,
    pub repaired: u64,
    pub rejected: u64,
}

///
/// EventReport
/// Point-in-time copy of the counters. Kinds that never fired are omitted.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub accepted: u64,
    pub repaired: u64,
    pub rejected: u64,
    pub kinds: BTreeMap<String, KindCounters>,
}

impl EventReport {
    /// Total number of checks recorded.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.accepted
            .saturating_add(self.repaired)
            .saturating_add(self.rejected)
    }
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

/// Build a report from the current state.
pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        accepted: m.ops.accepted,
        repaired: m.ops.repaired,
        rejected: m.ops.rejected,
        kinds: ConstraintKind::ALL
            .into_iter()
            .zip(m.kinds)
            .filter(|(_, counters)| *counters != KindCounters::default())
            .map(|(kind, counters)| (kind.to_string(), counters))
            .collect(),
    })
}
