// Path: crates/test_utils/src/fixtures/mod.rs

//! Mock wallet state and record builders for reproducible tests.

use custody_types::app::{Account, TransactionParams, TransactionRecord};
use serde_json::{json, Value};

pub use custody_types::app::TransactionStatus;

/// The address of the custodial account in the mock wallet state.
pub const CUSTODIAL_ADDRESS: &str = "0xABC";
/// The address of a custodial account whose custodian publishes normally.
pub const NON_DEFERRING_CUSTODIAL_ADDRESS: &str = "0x0dcd5d886577d5081b0c52e242ef29e70be3e7bc";
/// The address of a regular HD-keyring account.
pub const HD_ADDRESS: &str = "0xec1adf982415d2ef5ec55899b9bfb8bc0f29251b";
/// An address no account in the mock state owns.
pub const UNKNOWN_ADDRESS: &str = "0x9d0ba4ddac06032527b140912ec808ab9451b788";
/// The recipient used by the default transaction fixture.
pub const RECIPIENT_ADDRESS: &str = "0xDEF";

/// The accounts section of the mock wallet state, in the shape the account
/// directory persists (`internalAccounts.accounts` keyed by id).
pub fn mock_wallet_state() -> Value {
    json!({
        "internalAccounts": {
            "accounts": {
                "cf8dace4-9439-4bd4-b3a8-88c821c8fcb3": {
                    "address": HD_ADDRESS,
                    "id": "cf8dace4-9439-4bd4-b3a8-88c821c8fcb3",
                    "metadata": {
                        "importTime": 1738710364695u64,
                        "keyring": { "type": "HD Key Tree" },
                        "name": "Account 1"
                    },
                    "options": {},
                    "scopes": ["eip155:0"],
                    "type": "eip155:eoa"
                },
                "07c2cfec-36c9-46c4-8115-3836d3ac9047": {
                    "address": CUSTODIAL_ADDRESS,
                    "id": "07c2cfec-36c9-46c4-8115-3836d3ac9047",
                    "metadata": {
                        "importTime": 1738710442401u64,
                        "keyring": { "type": "Snap Keyring" },
                        "name": "Custody Account"
                    },
                    "options": {
                        "custodian": { "deferPublication": true }
                    },
                    "scopes": ["eip155:0"],
                    "type": "eip155:eoa"
                },
                "15e69915-2a1a-4019-93b3-916e11fd432f": {
                    "address": NON_DEFERRING_CUSTODIAL_ADDRESS,
                    "id": "15e69915-2a1a-4019-93b3-916e11fd432f",
                    "metadata": {
                        "importTime": 1738710472865u64,
                        "keyring": { "type": "Snap Keyring" },
                        "name": "Custody Account 2"
                    },
                    "options": {
                        "custodian": { "deferPublication": false }
                    },
                    "scopes": ["eip155:0"],
                    "type": "eip155:eoa"
                }
            },
            "selectedAccount": "cf8dace4-9439-4bd4-b3a8-88c821c8fcb3"
        }
    })
}

/// Decodes the accounts out of [`mock_wallet_state`].
pub fn mock_accounts() -> Vec<Account> {
    mock_wallet_state()
        .get("internalAccounts")
        .and_then(|s| s.get("accounts"))
        .and_then(Value::as_object)
        .map(|accounts| {
            accounts
                .values()
                .filter_map(|a| serde_json::from_value(a.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// A signed transaction awaiting publication, sent from `from`.
pub fn signed_transaction(id: &str, from: &str) -> TransactionRecord {
    TransactionRecord {
        id: id.to_string(),
        chain_id: "0x1".to_string(),
        tx_params: TransactionParams {
            from: from.to_string(),
            to: Some(RECIPIENT_ADDRESS.to_string()),
            value: Some("0x1".to_string()),
            data: Some("0x".to_string()),
            nonce: Some("0x0".to_string()),
            gas_limit: Some("0x5208".to_string()),
            max_fee_per_gas: Some("0x2540be400".to_string()),
            max_priority_fee_per_gas: Some("0x3b9aca00".to_string()),
            ..Default::default()
        },
        status: TransactionStatus::Signed,
        ..Default::default()
    }
}

/// A plugin reply to `transactions.getMutableTransactionParameters`.
pub fn mutable_parameters_response(hash: &str, nonce: &str) -> Value {
    json!({
        "keyringRequest": {
            "id": "5f1e1c2a-6a3e-4a8f-9b55-cc1a7d3e9f10",
            "scope": "eip155:1",
            "account": "07c2cfec-36c9-46c4-8115-3836d3ac9047",
            "request": {
                "method": "eth_signTransaction",
                "params": [{
                    "chainId": "0x1",
                    "nonce": "0x0",
                    "maxPriorityFeePerGas": "0x3b9aca00",
                    "maxFeePerGas": "0x2540be400",
                    "gasLimit": "0x5208",
                    "to": RECIPIENT_ADDRESS,
                    "value": "0x1",
                    "data": "0x",
                    "accessList": [],
                    "from": CUSTODIAL_ADDRESS,
                    "type": "0x2"
                }]
            }
        },
        "type": "eth_signTransaction",
        "fulfilled": true,
        "rejected": false,
        "lastUpdated": 1738710500000u64,
        "transaction": {
            "custodianTransactionId": "ctx-0001",
            "transactionStatus": {
                "finished": false,
                "success": false,
                "displayText": "Submitted",
                "submitted": true,
                "reason": "",
                "signed": true
            },
            "from": CUSTODIAL_ADDRESS,
            "custodianPublishesTransaction": true,
            "maxFeePerGas": "0x2e90edd000",
            "maxPriorityFeePerGas": "0x77359400",
            "gasLimit": "0x5300",
            "nonce": nonce,
            "to": RECIPIENT_ADDRESS,
            "transactionHash": hash
        },
        "result": { "v": "0x1", "r": "0x2", "s": "0x3" }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_state_contains_one_deferring_account() {
        let accounts = mock_accounts();
        assert_eq!(accounts.len(), 3);
        let deferring: Vec<_> = accounts
            .iter()
            .filter(|a| a.defers_publication())
            .collect();
        assert_eq!(deferring.len(), 1);
        assert_eq!(deferring[0].address, CUSTODIAL_ADDRESS);
    }
}
