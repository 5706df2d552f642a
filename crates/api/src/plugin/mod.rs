// Path: crates/api/src/plugin/mod.rs

use async_trait::async_trait;
use custody_types::app::SnapRequest;
use custody_types::error::PluginError;

pub mod http_adapter;
pub mod mock;

pub use http_adapter::HttpPluginHost;
pub use mock::MockPluginHost;

/// The sandboxed plugin execution environment.
///
/// The host owns the response schema; callers decode the returned JSON into the
/// type they expect and report a mismatch as `PluginError::MalformedResponse`.
#[async_trait]
pub trait PluginHost: Send + Sync {
    /// Dispatches `request` to the target plugin and returns its raw result.
    async fn handle_request(&self, request: SnapRequest) -> Result<serde_json::Value, PluginError>;
}
