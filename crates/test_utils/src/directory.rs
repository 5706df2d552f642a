// Path: crates/test_utils/src/directory.rs

//! An in-memory account directory seeded from the mock wallet state.

use async_trait::async_trait;
use custody_api::accounts::AccountDirectory;
use custody_types::app::Account;
use custody_types::error::StateError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::fixtures::mock_accounts;

/// An account directory backed by a fixed list of accounts.
#[derive(Debug, Default)]
pub struct InMemoryAccountDirectory {
    accounts: Vec<Account>,
    failing: AtomicBool,
    lookups: AtomicUsize,
}

impl InMemoryAccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            ..Default::default()
        }
    }

    /// A directory holding the accounts of the mock wallet state.
    pub fn from_mock_state() -> Self {
        Self::new(mock_accounts())
    }

    /// Makes every subsequent lookup fail with a backend error.
    pub fn fail_lookups(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// The number of lookups served so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn account_by_address(&self, address: &str) -> Result<Option<Account>, StateError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StateError::Backend("account store unavailable".into()));
        }
        Ok(self
            .accounts
            .iter()
            .find(|a| a.address.eq_ignore_ascii_case(address))
            .cloned())
    }
}
