// Path: crates/types/src/error/mod.rs
//! Core error types for the custodial transaction hooks.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised by the account directory or other wallet state accessors.
#[derive(Error, Debug)]
pub enum StateError {
    /// The state backend could not be reached.
    #[error("State backend error: {0}")]
    Backend(String),
    /// A stored record could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::Backend(_) => "STATE_BACKEND_ERROR",
            Self::Decode(_) => "STATE_DECODE_ERROR",
        }
    }
}

/// Errors raised while talking to the plugin host.
#[derive(Error, Debug)]
pub enum PluginError {
    /// The plugin host could not be reached.
    #[error("Plugin host unavailable: {0}")]
    Unavailable(String),
    /// The target plugin is not installed in the host.
    #[error("Plugin not installed: {0}")]
    NotInstalled(String),
    /// The request did not complete in time.
    #[error("Plugin request timed out after {0} ms")]
    Timeout(u64),
    /// The plugin answered with a JSON-RPC error object.
    #[error("Plugin returned error {code}: {message}")]
    Rpc {
        /// The JSON-RPC error code.
        code: i64,
        /// The JSON-RPC error message.
        message: String,
    },
    /// The response did not match the expected schema.
    #[error("Malformed plugin response: {0}")]
    MalformedResponse(String),
}

impl ErrorCode for PluginError {
    fn code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "PLUGIN_UNAVAILABLE",
            Self::NotInstalled(_) => "PLUGIN_NOT_INSTALLED",
            Self::Timeout(_) => "PLUGIN_TIMEOUT",
            Self::Rpc { .. } => "PLUGIN_RPC_ERROR",
            Self::MalformedResponse(_) => "PLUGIN_MALFORMED_RESPONSE",
        }
    }
}

/// Errors raised by the hosting transaction pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The transaction no longer exists in the pipeline.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
    /// The pipeline refused the requested update.
    #[error("Update rejected: {0}")]
    UpdateRejected(String),
    /// The requested network client is unknown.
    #[error("Network client not found: {0}")]
    NetworkClientNotFound(String),
    /// Batch submission failed.
    #[error("Batch submission failed: {0}")]
    Batch(String),
}

impl ErrorCode for PipelineError {
    fn code(&self) -> &'static str {
        match self {
            Self::TransactionNotFound(_) => "PIPELINE_TX_NOT_FOUND",
            Self::UpdateRejected(_) => "PIPELINE_UPDATE_REJECTED",
            Self::NetworkClientNotFound(_) => "PIPELINE_NETWORK_CLIENT_NOT_FOUND",
            Self::Batch(_) => "PIPELINE_BATCH_FAILED",
        }
    }
}

/// Errors surfaced by the pre-publication hook to the pipeline.
#[derive(Error, Debug)]
pub enum HookError {
    /// Fetching the custodian-mutated parameters failed.
    #[error("Plugin error: {0}")]
    Plugin(#[from] PluginError),
    /// Pushing the custodian values back into the pipeline failed.
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

impl ErrorCode for HookError {
    fn code(&self) -> &'static str {
        match self {
            Self::Plugin(e) => e.code(),
            Self::Pipeline(e) => e.code(),
        }
    }
}

/// Errors raised by the CAIP formatting helpers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChainIdError {
    /// The value is not a well-formed CAIP-2 chain id.
    #[error("Invalid CAIP-2 chain id: {0}")]
    InvalidCaip(String),
    /// The value cannot be represented as a decimal chain id.
    #[error("Chain id is not numeric: {0}")]
    NotNumeric(String),
}

impl ErrorCode for ChainIdError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidCaip(_) => "CHAIN_ID_INVALID_CAIP",
            Self::NotNumeric(_) => "CHAIN_ID_NOT_NUMERIC",
        }
    }
}

/// Errors raised when checksumming a hex address.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AddressError {
    /// The value is not a 20-byte hex address.
    #[error("Invalid hex address: {0}")]
    InvalidHexAddress(String),
}

impl ErrorCode for AddressError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidHexAddress(_) => "ADDRESS_INVALID_HEX",
        }
    }
}

/// Errors raised by the batched-call (`wallet_sendCalls`) helpers.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The request targets a chain other than the dApp's selected network.
    #[error("Chain ID must match the dApp selected network: Got {got}, expected {expected}")]
    ChainMismatch {
        /// The chain id carried by the request.
        got: String,
        /// The chain id of the dApp's network client.
        expected: String,
    },
    /// The pipeline failed while resolving or submitting the batch.
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

impl BatchError {
    /// The JSON-RPC error code this error maps to when returned to a dApp.
    pub fn rpc_code(&self) -> i64 {
        match self {
            Self::ChainMismatch { .. } => -32000,
            Self::Pipeline(_) => -32603,
        }
    }
}

impl ErrorCode for BatchError {
    fn code(&self) -> &'static str {
        match self {
            Self::ChainMismatch { .. } => "BATCH_CHAIN_MISMATCH",
            Self::Pipeline(e) => e.code(),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is not acceptable.
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "CONFIG_IO",
            Self::Parse(_) => "CONFIG_PARSE",
            Self::Invalid(_) => "CONFIG_INVALID",
        }
    }
}
