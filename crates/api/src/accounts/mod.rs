// Path: crates/api/src/accounts/mod.rs
//! Defines the `AccountDirectory` trait for decoupled account lookups.

use async_trait::async_trait;
use custody_types::app::Account;
use custody_types::error::StateError;

/// Read-only, address-keyed access to the wallet's account records.
///
/// This is the only view of wallet state the deferral predicate receives. The
/// pipeline injects an implementation rather than the hook reaching into global state.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Returns the account owning `address`, or `None` when no account matches.
    ///
    /// Address comparison is case-insensitive.
    async fn account_by_address(&self, address: &str) -> Result<Option<Account>, StateError>;
}
