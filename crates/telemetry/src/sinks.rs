// Path: crates/telemetry/src/sinks.rs
//! Defines abstract traits for metrics reporting, decoupling hook logic from the backend.

use once_cell::sync::OnceCell;

// --- Static Sink Access ---

/// A no-op sink for use in tests or when telemetry is disabled.
#[derive(Debug, Clone, Copy)]
pub struct NopSink;

/// A lazily-initialized static reference to the global `MetricsSink` implementation.
pub static SINK: OnceCell<&'static dyn MetricsSink> = OnceCell::new();
static NOP_SINK: NopSink = NopSink;

/// Returns a static reference to the configured error metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn error_metrics() -> &'static dyn ErrorMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

/// Returns a static reference to the configured hook metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn hook_metrics() -> &'static dyn HookMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

// --- Trait Definitions ---

/// A sink for errors, categorized by kind and stable code.
pub trait ErrorMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments a counter for a specific error, categorized by its kind and variant.
    fn inc_error(&self, kind: &'static str, variant: &'static str);
}
impl ErrorMetricsSink for NopSink {
    fn inc_error(&self, _kind: &'static str, _variant: &'static str) {}
}

/// A sink for the deferred publication hooks.
pub trait HookMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments the counter of transactions handed off to a custodian.
    fn inc_deferred_publications(&self);
    /// Increments the counter of transactions left to the pipeline's own broadcast.
    fn inc_passthrough_publications(&self);
    /// Increments the counter of pending-status polls skipped for custodial transactions.
    fn inc_pending_checks_skipped(&self);
    /// Observes the round-trip latency of a plugin request.
    fn observe_plugin_request_latency(&self, method: &str, duration_secs: f64);
}
impl HookMetricsSink for NopSink {
    fn inc_deferred_publications(&self) {}
    fn inc_passthrough_publications(&self) {}
    fn inc_pending_checks_skipped(&self) {}
    fn observe_plugin_request_latency(&self, _method: &str, _duration_secs: f64) {}
}

/// A unified sink that implements all domain-specific traits, providing a single
/// point of implementation for metrics backends like Prometheus.
pub trait MetricsSink: ErrorMetricsSink + HookMetricsSink {}

// Blanket implementation to allow any type that implements all sub-traits
// to be used as a `MetricsSink`.
impl<T> MetricsSink for T where T: ErrorMetricsSink + HookMetricsSink {}
