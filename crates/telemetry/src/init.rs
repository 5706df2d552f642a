// Path: crates/telemetry/src/init.rs
use custody_types::config::TelemetryConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Initializes the global `tracing` subscriber for structured JSON logging.
///
/// `log` records emitted by dependencies are bridged into `tracing`.
pub fn init_tracing() -> Result<(), anyhow::Error> {
    let fmt_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Brings up logging and, when enabled, the Prometheus metrics sink.
///
/// Must be called once at process start, before any hook runs.
pub fn init(config: &TelemetryConfig) -> Result<(), anyhow::Error> {
    init_tracing()?;
    if config.metrics {
        crate::prometheus::install()?;
    }
    tracing::info!(target: "custody", metrics = config.metrics, "telemetry initialized");
    Ok(())
}
