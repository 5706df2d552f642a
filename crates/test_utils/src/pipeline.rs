// Path: crates/test_utils/src/pipeline.rs

//! A recording stand-in for the transaction pipeline and its batch services.

use async_trait::async_trait;
use custody_api::batch::{NetworkClientResolver, TransactionBatcher, UpgradePreferences};
use custody_api::transaction::CustodialTransactionUpdater;
use custody_types::app::{CustodialTransactionUpdate, TransactionBatchRequest, TransactionRecord};
use custody_types::error::PipelineError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use tokio::sync::Mutex;

/// A stand-in for the hosting transaction pipeline that records what it is asked to do.
#[derive(Debug, Default)]
pub struct RecordingPipeline {
    updates: Mutex<Vec<(String, CustodialTransactionUpdate)>>,
    batches: Mutex<Vec<TransactionBatchRequest>>,
    transactions: RwLock<Vec<TransactionRecord>>,
    network_clients: HashMap<String, String>,
    atomic_chains: Vec<String>,
    disabled_upgrade_chains: Vec<String>,
    reject_updates: AtomicBool,
}

impl RecordingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a network client and the hex chain id it is connected to.
    pub fn with_network_client(mut self, id: &str, chain_id: &str) -> Self {
        self.network_clients
            .insert(id.to_string(), chain_id.to_string());
        self
    }

    /// Sets the chains on which atomic batches are supported.
    pub fn with_atomic_chains(mut self, chains: &[&str]) -> Self {
        self.atomic_chains = chains.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Sets the chains on which the user disabled account upgrades.
    pub fn with_disabled_upgrade_chains(mut self, chains: &[&str]) -> Self {
        self.disabled_upgrade_chains = chains.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Seeds the pipeline's transaction list.
    pub fn with_transactions(self, transactions: Vec<TransactionRecord>) -> Self {
        if let Ok(mut guard) = self.transactions.write() {
            *guard = transactions;
        }
        self
    }

    /// Makes every subsequent custodial update fail.
    pub fn reject_updates(&self, reject: bool) {
        self.reject_updates.store(reject, Ordering::SeqCst);
    }

    /// Custodial updates received so far, oldest first.
    pub async fn updates(&self) -> Vec<(String, CustodialTransactionUpdate)> {
        self.updates.lock().await.clone()
    }

    /// Batches submitted so far, oldest first.
    pub async fn batches(&self) -> Vec<TransactionBatchRequest> {
        self.batches.lock().await.clone()
    }
}

#[async_trait]
impl CustodialTransactionUpdater for RecordingPipeline {
    async fn update_custodial_transaction(
        &self,
        id: &str,
        update: CustodialTransactionUpdate,
    ) -> Result<(), PipelineError> {
        if self.reject_updates.load(Ordering::SeqCst) {
            return Err(PipelineError::UpdateRejected(format!(
                "transaction {} is locked",
                id
            )));
        }
        self.updates.lock().await.push((id.to_string(), update));
        Ok(())
    }
}

#[async_trait]
impl NetworkClientResolver for RecordingPipeline {
    async fn chain_id_for_client(&self, network_client_id: &str) -> Result<String, PipelineError> {
        self.network_clients
            .get(network_client_id)
            .cloned()
            .ok_or_else(|| PipelineError::NetworkClientNotFound(network_client_id.to_string()))
    }
}

#[async_trait]
impl TransactionBatcher for RecordingPipeline {
    async fn add_transaction_batch(
        &self,
        request: TransactionBatchRequest,
    ) -> Result<String, PipelineError> {
        let mut batches = self.batches.lock().await;
        batches.push(request);
        Ok(format!("0x{:032x}", batches.len()))
    }

    async fn atomic_batch_chains(&self, _address: &str) -> Result<Vec<String>, PipelineError> {
        Ok(self.atomic_chains.clone())
    }

    fn transactions(&self) -> Vec<TransactionRecord> {
        self.transactions
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl UpgradePreferences for RecordingPipeline {
    fn disabled_account_upgrade_chains(&self) -> Vec<String> {
        self.disabled_upgrade_chains.clone()
    }
}
