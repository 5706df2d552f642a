// Path: crates/telemetry/src/time.rs
use crate::sinks::HookMetricsSink;
use std::time::Instant;

/// Reports the lifetime of the guard as a plugin request latency when dropped.
pub struct Timer<'a> {
    sink: &'a dyn HookMetricsSink,
    method: &'a str,
    start: Instant,
}

impl<'a> Timer<'a> {
    pub fn new(sink: &'a dyn HookMetricsSink, method: &'a str) -> Self {
        Self {
            sink,
            method,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.sink
            .observe_plugin_request_latency(self.method, self.start.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recorder(Mutex<Vec<(String, f64)>>);

    impl HookMetricsSink for Recorder {
        fn inc_deferred_publications(&self) {}
        fn inc_passthrough_publications(&self) {}
        fn inc_pending_checks_skipped(&self) {}
        fn observe_plugin_request_latency(&self, method: &str, duration_secs: f64) {
            self.0.lock().unwrap().push((method.to_string(), duration_secs));
        }
    }

    #[test]
    fn timer_reports_on_drop() {
        let recorder = Recorder::default();
        {
            let _timer = Timer::new(&recorder, "transactions.getMutableTransactionParameters");
        }
        let observed = recorder.0.lock().unwrap();
        assert_eq!(observed.len(), 1);
        assert_eq!(observed[0].0, "transactions.getMutableTransactionParameters");
        assert!(observed[0].1 >= 0.0);
    }
}
