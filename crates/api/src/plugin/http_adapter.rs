// Path: crates/api/src/plugin/http_adapter.rs

use async_trait::async_trait;
use custody_types::app::SnapRequest;
use custody_types::config::PluginHostConfig;
use custody_types::error::PluginError;
use custody_types::prelude::OptionExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::PluginHost;

/// The JSON-RPC method plugin hosts expose for forwarding requests to a plugin.
const HANDLE_REQUEST_METHOD: &str = "snap_handleRequest";

/// A plugin host reached over HTTP JSON-RPC 2.0.
pub struct HttpPluginHost {
    client: Client,
    endpoint: String,
    timeout: Duration,
    next_id: AtomicU64,
}

impl HttpPluginHost {
    pub fn new(config: &PluginHostConfig) -> Result<Self, PluginError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PluginError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// --- JSON-RPC Envelope Structures ---

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: &'a SnapRequest,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Maps a decoded JSON-RPC response onto the plugin result or a `PluginError`.
pub(crate) fn decode_rpc_response(
    response: RpcResponse,
    snap_id: &str,
) -> Result<serde_json::Value, PluginError> {
    if let Some(err) = response.error {
        let lowered = err.message.to_ascii_lowercase();
        if lowered.contains("not found") && err.message.contains(snap_id) {
            return Err(PluginError::NotInstalled(snap_id.to_string()));
        }
        return Err(PluginError::Rpc {
            code: err.code,
            message: err.message,
        });
    }
    response
        .result
        .required(PluginError::MalformedResponse(
            "response carries neither result nor error".into(),
        ))
}

#[async_trait]
impl PluginHost for HttpPluginHost {
    async fn handle_request(&self, request: SnapRequest) -> Result<serde_json::Value, PluginError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            id,
            method: HANDLE_REQUEST_METHOD,
            params: &request,
        };

        log::debug!(
            "HttpPluginHost: request {} -> {} ({})",
            id,
            request.snap_id,
            request.request.method
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PluginError::Timeout(self.timeout.as_millis() as u64)
                } else {
                    PluginError::Unavailable(format!("HTTP request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            log::warn!("HttpPluginHost: host answered {}: {}", status, error_text);
            return Err(PluginError::Unavailable(format!(
                "Plugin host error {}: {}",
                status, error_text
            )));
        }

        let decoded = response.json::<RpcResponse>().await.map_err(|e| {
            PluginError::MalformedResponse(format!("Failed to parse JSON-RPC response: {}", e))
        })?;

        decode_rpc_response(decoded, &request.snap_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use custody_types::app::{HandlerType, SnapRpcCall};
    use serde_json::json;

    fn decode(body: serde_json::Value) -> Result<serde_json::Value, PluginError> {
        let response: RpcResponse = serde_json::from_value(body).unwrap();
        decode_rpc_response(response, "npm:@acme/custody-snap")
    }

    #[test]
    fn result_is_returned_verbatim() {
        let out = decode(json!({ "jsonrpc": "2.0", "id": 1, "result": { "ok": true } })).unwrap();
        assert_eq!(out, json!({ "ok": true }));
    }

    #[test]
    fn rpc_error_is_surfaced_with_code() {
        let err = decode(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32603, "message": "Transaction not found" }
        }))
        .unwrap_err();
        assert!(matches!(err, PluginError::Rpc { code: -32603, .. }));
    }

    #[test]
    fn missing_snap_is_reported_as_not_installed() {
        let err = decode(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32603, "message": "Snap \"npm:@acme/custody-snap\" not found." }
        }))
        .unwrap_err();
        assert!(matches!(err, PluginError::NotInstalled(_)));
    }

    #[test]
    fn empty_response_is_malformed() {
        let err = decode(json!({ "jsonrpc": "2.0", "id": 1 })).unwrap_err();
        assert!(matches!(err, PluginError::MalformedResponse(_)));
    }

    #[test]
    fn request_envelope_wraps_snap_request() {
        let request = SnapRequest {
            snap_id: "npm:@acme/custody-snap".into(),
            origin: "metamask".into(),
            handler: HandlerType::OnRpcRequest,
            request: SnapRpcCall {
                method: "transactions.getMutableTransactionParameters".into(),
                params: json!({ "from": "0xabc" }),
            },
        };
        let envelope = RpcRequest {
            jsonrpc: "2.0",
            id: 7,
            method: HANDLE_REQUEST_METHOD,
            params: &request,
        };
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "snap_handleRequest",
                "params": {
                    "snapId": "npm:@acme/custody-snap",
                    "origin": "metamask",
                    "handler": "onRpcRequest",
                    "request": {
                        "method": "transactions.getMutableTransactionParameters",
                        "params": { "from": "0xabc" }
                    }
                }
            })
        );
    }

    #[test]
    fn host_is_built_from_config() {
        let host = HttpPluginHost::new(&PluginHostConfig::default()).unwrap();
        assert_eq!(host.endpoint(), "http://127.0.0.1:8080/snaps");
    }
}
