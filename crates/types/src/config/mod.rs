// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for the custodial transaction hooks.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The method the institutional plugin exposes for mutated transaction lookups.
pub const GET_MUTABLE_TRANSACTION_PARAMETERS: &str = "transactions.getMutableTransactionParameters";

/// Settings for the deferred publication hooks.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DeferredPublicationConfig {
    /// The identifier of the institutional wallet plugin.
    #[serde(default = "default_snap_id")]
    pub snap_id: String,
    /// The origin requests are made on behalf of.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// The plugin method returning custodian-mutated parameters.
    #[serde(default = "default_method")]
    pub method: String,
}

fn default_snap_id() -> String {
    "npm:@metamask/institutional-wallet-snap".to_string()
}
fn default_origin() -> String {
    "metamask".to_string()
}
fn default_method() -> String {
    GET_MUTABLE_TRANSACTION_PARAMETERS.to_string()
}

impl Default for DeferredPublicationConfig {
    fn default() -> Self {
        Self {
            snap_id: default_snap_id(),
            origin: default_origin(),
            method: default_method(),
        }
    }
}

/// Settings for the HTTP JSON-RPC plugin host adapter.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PluginHostConfig {
    /// The JSON-RPC endpoint of the plugin host.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8080/snaps".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for PluginHostConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Settings for logging and metrics.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Install the Prometheus metrics sink at startup.
    #[serde(default = "default_metrics")]
    pub metrics: bool,
}

fn default_metrics() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            metrics: default_metrics(),
        }
    }
}

/// The top-level configuration file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct CustodyConfig {
    /// Deferred publication hook settings.
    #[serde(default)]
    pub deferred_publication: DeferredPublicationConfig,
    /// Plugin host adapter settings.
    #[serde(default)]
    pub plugin_host: PluginHostConfig,
    /// Telemetry settings.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl CustodyConfig {
    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.deferred_publication.snap_id.is_empty() {
            return Err(ConfigError::Invalid(
                "deferred_publication.snap_id must not be empty".into(),
            ));
        }
        if self.plugin_host.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "plugin_host.timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
