// Path: crates/types/src/app/account.rs

//! Wallet accounts and the custodian options attached to them.

use serde::{Deserialize, Serialize};

/// Custodian-specific account options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustodianOptions {
    /// When set, publication of transactions from this account is owned by the custodian.
    #[serde(default)]
    pub defer_publication: bool,
}

/// Per-account configuration attached by the keyring that owns the account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountOptions {
    /// Present only for accounts managed by a custodial keyring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custodian: Option<CustodianOptions>,
}

/// An account record as held by the wallet's account directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The directory-assigned account identifier.
    pub id: String,
    /// The account address.
    pub address: String,
    /// Keyring-specific options.
    #[serde(default)]
    pub options: AccountOptions,
}

impl Account {
    /// Returns true when the account's custodian has asked to own transaction publication.
    pub fn defers_publication(&self) -> bool {
        self.options
            .custodian
            .as_ref()
            .map(|c| c.defer_publication)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_without_custodian_block_does_not_defer() {
        let account: Account = serde_json::from_value(json!({
            "id": "a1",
            "address": "0xabc",
            "options": {}
        }))
        .unwrap();
        assert!(!account.defers_publication());
    }

    #[test]
    fn account_with_custodian_flag_defers() {
        let account: Account = serde_json::from_value(json!({
            "id": "a1",
            "address": "0xabc",
            "options": { "custodian": { "deferPublication": true } }
        }))
        .unwrap();
        assert!(account.defers_publication());
    }

    #[test]
    fn missing_options_default_to_no_deferral() {
        let account: Account =
            serde_json::from_value(json!({ "id": "a1", "address": "0xabc" })).unwrap();
        assert!(!account.defers_publication());
    }
}
