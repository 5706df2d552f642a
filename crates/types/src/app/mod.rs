// Path: crates/types/src/app/mod.rs

//! Core application-level data structures for the custodial transaction hooks.

use serde::{Deserialize, Serialize};
use std::fmt;

mod account;
mod batch;
mod snap;

pub use account::*;
pub use batch::*;
pub use snap::*;

/// The lifecycle status of a transaction as tracked by the hosting pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Created but not yet approved by the user.
    #[default]
    Unapproved,
    /// Approved by the user, awaiting signature.
    Approved,
    /// Signed, awaiting publication.
    Signed,
    /// Broadcast to the network (by the pipeline or by a custodian).
    Submitted,
    /// Included in a block.
    Confirmed,
    /// Publication or execution failed.
    Failed,
    /// Replaced or evicted before confirmation.
    Dropped,
}

impl TransactionStatus {
    /// Returns the canonical lowercase name used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unapproved => "unapproved",
            Self::Approved => "approved",
            Self::Signed => "signed",
            Self::Submitted => "submitted",
            Self::Confirmed => "confirmed",
            Self::Failed => "failed",
            Self::Dropped => "dropped",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parameter set of an EVM transaction. Quantities are `0x`-prefixed hex strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionParams {
    /// The sender address.
    pub from: String,
    /// The recipient address, absent for contract deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// The value transferred, in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// The call data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// The sender nonce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// The gas limit. Serialized as `gas` to match the JSON-RPC transaction object.
    #[serde(default, rename = "gas", skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<String>,
    /// The legacy gas price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    /// The EIP-1559 fee cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    /// The EIP-1559 priority fee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
}

/// A receipt attached to a transaction once it has been mined.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// The hash of the including block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    /// The number of the including block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,
    /// The gas consumed by the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<String>,
    /// `0x1` on success, `0x0` on revert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The pipeline's representation of a single transaction.
///
/// The record is owned by the hosting pipeline. Hooks receive it by reference and
/// request changes through [`CustodialTransactionUpdate`]; they never mutate it directly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// The pipeline-assigned transaction identifier.
    pub id: String,
    /// The chain identifier as a `0x`-prefixed hex string.
    pub chain_id: String,
    /// The transaction parameters as originally requested.
    pub tx_params: TransactionParams,
    /// The current lifecycle status.
    #[serde(default)]
    pub status: TransactionStatus,
    /// The transaction hash, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// The receipt, once mined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_receipt: Option<TransactionReceipt>,
}

/// The subset of transaction fields a custodian is allowed to overwrite.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustodialTransactionUpdate {
    /// The new lifecycle status.
    pub status: TransactionStatus,
    /// The custodian-confirmed transaction hash.
    pub hash: String,
    /// The custodian-selected nonce.
    pub nonce: String,
    /// The custodian-selected gas limit, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<String>,
    /// The custodian-selected fee cap; absent for legacy-gas transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    /// The custodian-selected priority fee; absent for legacy-gas transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
}
