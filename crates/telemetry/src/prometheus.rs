// Path: crates/telemetry/src/prometheus.rs
//! A concrete implementation of the metrics sinks using the Prometheus crate.

use crate::sinks::*;
use once_cell::sync::OnceCell;
use prometheus::{
    exponential_buckets, register_histogram_vec, register_int_counter, register_int_counter_vec,
    HistogramVec, IntCounter, IntCounterVec,
};

// --- Metric Statics ---
// Collectors are initialized exactly once by `install`.

static DEFERRED_PUBLICATIONS_TOTAL: OnceCell<IntCounter> = OnceCell::new();
static PASSTHROUGH_PUBLICATIONS_TOTAL: OnceCell<IntCounter> = OnceCell::new();
static PENDING_CHECKS_SKIPPED_TOTAL: OnceCell<IntCounter> = OnceCell::new();
static PLUGIN_REQUEST_DURATION_SECONDS: OnceCell<HistogramVec> = OnceCell::new();
static ERRORS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();

#[derive(Debug, Clone, Copy)]
pub struct PrometheusSink;

/// Records against a collector if it has been installed. Before `install` the
/// observation is dropped, matching the no-op sink.
macro_rules! with_metric {
    ($metric:ident, |$m:ident| $body:expr) => {
        if let Some($m) = $metric.get() {
            $body;
        }
    };
}

impl ErrorMetricsSink for PrometheusSink {
    fn inc_error(&self, kind: &'static str, variant: &'static str) {
        with_metric!(ERRORS_TOTAL, |m| m.with_label_values(&[kind, variant]).inc());
    }
}

impl HookMetricsSink for PrometheusSink {
    fn inc_deferred_publications(&self) {
        with_metric!(DEFERRED_PUBLICATIONS_TOTAL, |m| m.inc());
    }
    fn inc_passthrough_publications(&self) {
        with_metric!(PASSTHROUGH_PUBLICATIONS_TOTAL, |m| m.inc());
    }
    fn inc_pending_checks_skipped(&self) {
        with_metric!(PENDING_CHECKS_SKIPPED_TOTAL, |m| m.inc());
    }
    fn observe_plugin_request_latency(&self, method: &str, duration_secs: f64) {
        with_metric!(PLUGIN_REQUEST_DURATION_SECONDS, |m| m
            .with_label_values(&[method])
            .observe(duration_secs));
    }
}

static PROMETHEUS_SINK: PrometheusSink = PrometheusSink;

fn already_installed() -> prometheus::Error {
    prometheus::Error::Msg("prometheus sink already installed".into())
}

/// Registers all collectors with the default registry and installs the global sink.
///
/// Calling this twice returns an error.
pub fn install() -> Result<&'static dyn MetricsSink, prometheus::Error> {
    DEFERRED_PUBLICATIONS_TOTAL
        .set(register_int_counter!(
            "custody_deferred_publications_total",
            "Transactions whose publication was handed off to a custodian."
        )?)
        .map_err(|_| already_installed())?;
    PASSTHROUGH_PUBLICATIONS_TOTAL
        .set(register_int_counter!(
            "custody_passthrough_publications_total",
            "Transactions left to the pipeline's own broadcast."
        )?)
        .map_err(|_| already_installed())?;
    PENDING_CHECKS_SKIPPED_TOTAL
        .set(register_int_counter!(
            "custody_pending_checks_skipped_total",
            "Pending-status polls skipped for custodian-managed transactions."
        )?)
        .map_err(|_| already_installed())?;
    PLUGIN_REQUEST_DURATION_SECONDS
        .set(register_histogram_vec!(
            "custody_plugin_request_duration_seconds",
            "Round-trip latency of plugin requests.",
            &["method"],
            exponential_buckets(0.005, 2.0, 14)?
        )?)
        .map_err(|_| already_installed())?;
    ERRORS_TOTAL
        .set(register_int_counter_vec!(
            "custody_errors_total",
            "Errors by kind and stable code.",
            &["kind", "code"]
        )?)
        .map_err(|_| already_installed())?;

    let sink: &'static dyn MetricsSink = &PROMETHEUS_SINK;
    SINK.set(sink).map_err(|_| already_installed())?;
    Ok(sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_registers_collectors_once() {
        let sink = install().unwrap();
        sink.inc_deferred_publications();
        sink.inc_error("hook", "PLUGIN_TIMEOUT");
        sink.observe_plugin_request_latency("transactions.getMutableTransactionParameters", 0.02);

        let families = prometheus::gather();
        let names: Vec<_> = families.iter().map(|f| f.get_name().to_string()).collect();
        assert!(names.contains(&"custody_deferred_publications_total".to_string()));
        assert!(names.contains(&"custody_errors_total".to_string()));

        assert!(install().is_err());
    }
}
