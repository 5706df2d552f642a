// Path: crates/types/src/app/batch.rs

//! Batched-call (`wallet_sendCalls`) request and capability types.

use serde::{Deserialize, Serialize};

/// A single call inside a `wallet_sendCalls` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchCall {
    /// The call target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// The value to transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// The call data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// The parameters of a `wallet_sendCalls` (EIP-5792) request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SendCalls {
    /// The request format version.
    #[serde(default)]
    pub version: String,
    /// The sender address.
    pub from: String,
    /// The chain the dApp expects the batch to execute on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    /// The calls to execute.
    pub calls: Vec<BatchCall>,
}

/// A batch submission as handed to the pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBatchRequest {
    /// The sender address.
    pub from: String,
    /// The network client the batch is submitted through.
    pub network_client_id: String,
    /// The calls to execute, in order.
    pub transactions: Vec<BatchCall>,
}

/// Atomic batch support for a chain.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomicBatchCapability {
    /// Whether atomic batching is supported.
    pub supported: bool,
}

/// The capabilities advertised for a single chain.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainCapabilities {
    /// Atomic batch support.
    pub atomic_batch: AtomicBatchCapability,
}
