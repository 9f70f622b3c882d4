//! Observability: constraint check counters and the sink they flow through.
//!
//! Holder logic never touches `metrics` directly; every check is reported as a
//! `MetricsEvent` through `sink::record`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventReport, KindCounters};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
