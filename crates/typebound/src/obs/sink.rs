//! Metrics sink boundary.
//!
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.
//! This module is the only bridge between holder logic and the thread-local
//! metrics state.
use crate::{constraint::ConstraintKind, obs::metrics};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    /// The candidate passed on the first test.
    Accepted { kind: ConstraintKind },

    /// The candidate failed, and the verifier repaired it.
    Repaired { kind: ConstraintKind },

    /// The candidate still failed after verification.
    Rejected { kind: ConstraintKind },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

#[cfg_attr(not(feature = "metrics"), allow(dead_code))]
pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::Accepted { kind } => {
                m.ops.accepted = m.ops.accepted.saturating_add(1);
                let entry = m.kind_mut(kind);
                entry.accepted = entry.accepted.saturating_add(1);
            }
            MetricsEvent::Repaired { kind } => {
                m.ops.repaired = m.ops.repaired.saturating_add(1);
                let entry = m.kind_mut(kind);
                entry.repaired = entry.repaired.saturating_add(1);
            }
            MetricsEvent::Rejected { kind } => {
                m.ops.rejected = m.ops.rejected.saturating_add(1);
                let entry = m.kind_mut(kind);
                entry.rejected = entry.rejected.saturating_add(1);
            }
        });
    }
}

#[cfg_attr(not(feature = "metrics"), allow(dead_code))]
pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

#[cfg(feature = "metrics")]
pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in `with_metrics_sink`,
        //   which restores the previous slot on every exit, including unwinding.
        // - `record` is synchronous and never keeps `ptr` past this call.
        // - Only a shared reference is materialized, matching the original borrow.
        unsafe { (*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

#[cfg(not(feature = "metrics"))]
pub(crate) const fn record(_: MetricsEvent) {}

/// Snapshot the current thread's metrics.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state on the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - The pointer is installed only for this dynamic scope; `Guard` restores
    //   the previous slot on all exits, including panic.
    // - `record` dereferences synchronously and never persists the pointer.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
