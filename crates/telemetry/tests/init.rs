// Path: crates/telemetry/tests/init.rs

use custody_telemetry::{hook_metrics, init};
use custody_types::config::{CustodyConfig, TelemetryConfig};

#[test]
fn init_installs_metrics_when_enabled() {
    let config = CustodyConfig::from_toml_str("[telemetry]\nmetrics = true\n").unwrap();
    init(&config.telemetry).unwrap();

    hook_metrics().inc_deferred_publications();
    let names: Vec<_> = prometheus::gather()
        .iter()
        .map(|f| f.get_name().to_string())
        .collect();
    assert!(names.contains(&"custody_deferred_publications_total".to_string()));

    // The global subscriber and sink are process-wide.
    assert!(init(&TelemetryConfig { metrics: false }).is_err());
}
