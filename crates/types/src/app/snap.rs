// Path: crates/types/src/app/snap.rs

//! Request and response envelopes exchanged with the institutional wallet plugin.
//!
//! The plugin owns these schemas. Only the fields the hooks act on are required;
//! everything else is decoded leniently so that additive plugin changes do not
//! break publication.

use super::TransactionRecord;
use serde::{Deserialize, Serialize};

/// The entry point a plugin request is dispatched to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerType {
    /// The plugin's JSON-RPC request handler.
    #[serde(rename = "onRpcRequest")]
    OnRpcRequest,
    /// The plugin's keyring request handler.
    #[serde(rename = "onKeyringRequest")]
    OnKeyringRequest,
}

/// A JSON-RPC style method call carried inside a [`SnapRequest`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SnapRpcCall {
    /// The plugin method name.
    pub method: String,
    /// The method parameters.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// A request to the plugin host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapRequest {
    /// The identifier of the target plugin.
    pub snap_id: String,
    /// The origin the request is made on behalf of.
    pub origin: String,
    /// The plugin entry point.
    pub handler: HandlerType,
    /// The method call itself.
    pub request: SnapRpcCall,
}

/// Parameters the plugin uses to locate a custodial transaction.
///
/// The plugin does not know the pipeline's transaction id, so the original
/// (pre-custodian) parameters serve as the lookup key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    /// The sender address.
    pub from: String,
    /// The recipient address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// The value transferred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// The call data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// The chain identifier.
    pub chain_id: String,
}

impl SearchParameters {
    /// Builds the lookup key from a record's original parameters.
    pub fn from_record(record: &TransactionRecord) -> Self {
        let params = &record.tx_params;
        Self {
            from: params.from.clone(),
            to: params.to.clone(),
            value: params.value.clone(),
            data: params.data.clone(),
            chain_id: record.chain_id.clone(),
        }
    }
}

/// The custodian's view of a transaction's progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CustodianTransactionStatus {
    /// The custodian has reached a terminal state.
    pub finished: bool,
    /// The terminal state is a success.
    pub success: bool,
    /// Human readable status.
    pub display_text: String,
    /// The custodian has broadcast the transaction.
    pub submitted: bool,
    /// Failure or rejection reason, if any.
    pub reason: String,
    /// The custodian has signed the transaction.
    pub signed: bool,
}

/// The custodial transaction as returned by the plugin, with custodian-mutated parameters.
///
/// Only the hash and nonce are required. Legacy-gas transactions carry no EIP-1559
/// fee fields and contract creations carry no recipient.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustodialTransaction {
    /// The custodian's own identifier for the transaction.
    #[serde(default)]
    pub custodian_transaction_id: String,
    /// The custodian-side status.
    #[serde(default)]
    pub transaction_status: CustodianTransactionStatus,
    /// The sender address.
    #[serde(default)]
    pub from: Option<String>,
    /// True when the custodian broadcasts the transaction itself.
    #[serde(default)]
    pub custodian_publishes_transaction: bool,
    /// The custodian-selected fee cap.
    #[serde(default)]
    pub max_fee_per_gas: Option<String>,
    /// The custodian-selected priority fee.
    #[serde(default)]
    pub max_priority_fee_per_gas: Option<String>,
    /// The custodian-selected gas limit.
    #[serde(default)]
    pub gas_limit: Option<String>,
    /// The custodian-selected nonce.
    pub nonce: String,
    /// The recipient address.
    #[serde(default)]
    pub to: Option<String>,
    /// The hash under which the custodian published the transaction.
    pub transaction_hash: String,
}

/// The keyring request the plugin originally received for this transaction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyringRequest {
    /// The keyring request identifier.
    pub id: String,
    /// The CAIP-2 scope of the request.
    pub scope: String,
    /// The keyring account identifier.
    pub account: String,
    /// The signing request as forwarded to the keyring.
    pub request: Option<SnapRpcCall>,
}

/// The signature components returned by the custodian.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SignatureResult {
    /// Recovery id.
    pub v: String,
    /// Signature `r` value.
    pub r: String,
    /// Signature `s` value.
    pub s: String,
}

/// The plugin's reply to `transactions.getMutableTransactionParameters`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalSnapResponse {
    /// The originating keyring request.
    #[serde(default)]
    pub keyring_request: KeyringRequest,
    /// The request type reported by the plugin.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// The request has been fulfilled by the custodian.
    #[serde(default)]
    pub fulfilled: bool,
    /// The request has been rejected by the custodian.
    #[serde(default)]
    pub rejected: bool,
    /// Milliseconds since the epoch of the last custodian update.
    #[serde(default)]
    pub last_updated: u64,
    /// The custodial transaction with its mutated parameters.
    pub transaction: CustodialTransaction,
    /// The signature, when the custodian returns one.
    #[serde(default)]
    pub result: Option<SignatureResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TransactionParams;
    use serde_json::json;

    #[test]
    fn handler_type_uses_plugin_wire_names() {
        assert_eq!(
            serde_json::to_value(HandlerType::OnRpcRequest).unwrap(),
            json!("onRpcRequest")
        );
    }

    #[test]
    fn search_parameters_take_original_fields() {
        let record = TransactionRecord {
            id: "tx-1".into(),
            chain_id: "0x1".into(),
            tx_params: TransactionParams {
                from: "0xabc".into(),
                to: Some("0xdef".into()),
                value: Some("0x1".into()),
                data: Some("0x".into()),
                nonce: Some("0x9".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let search = SearchParameters::from_record(&record);
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({
                "from": "0xabc",
                "to": "0xdef",
                "value": "0x1",
                "data": "0x",
                "chainId": "0x1"
            })
        );
    }

    #[test]
    fn response_decodes_with_only_required_fields() {
        let response: InstitutionalSnapResponse = serde_json::from_value(json!({
            "transaction": {
                "transactionHash": "0x123",
                "nonce": "0x5",
                "gasLimit": "0x5208",
                "maxFeePerGas": "0x10",
                "maxPriorityFeePerGas": "0x1"
            }
        }))
        .unwrap();
        assert_eq!(response.transaction.transaction_hash, "0x123");
        assert!(!response.fulfilled);
        assert!(response.result.is_none());
    }

    #[test]
    fn search_parameters_omit_absent_fields() {
        let record = TransactionRecord {
            id: "tx-2".into(),
            chain_id: "0x1".into(),
            tx_params: TransactionParams {
                from: "0xabc".into(),
                data: Some("0x6080".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let search = SearchParameters::from_record(&record);
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({ "from": "0xabc", "data": "0x6080", "chainId": "0x1" })
        );
    }

    #[test]
    fn response_tolerates_legacy_gas_and_contract_creation() {
        let response: InstitutionalSnapResponse = serde_json::from_value(json!({
            "keyringRequest": { "request": { "method": "eth_signTransaction" } },
            "transaction": {
                "transactionHash": "0x123",
                "nonce": "0x5",
                "to": null,
                "from": null
            }
        }))
        .unwrap();
        let tx = &response.transaction;
        assert!(tx.to.is_none());
        assert!(tx.from.is_none());
        assert!(tx.gas_limit.is_none());
        assert!(tx.max_fee_per_gas.is_none());
        let call = response.keyring_request.request.unwrap();
        assert_eq!(call.method, "eth_signTransaction");
        assert!(call.params.is_null());
    }

    #[test]
    fn response_without_hash_is_rejected() {
        let decoded = serde_json::from_value::<InstitutionalSnapResponse>(json!({
            "transaction": { "nonce": "0x5" }
        }));
        assert!(decoded.is_err());
    }
}
