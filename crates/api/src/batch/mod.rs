// Path: crates/api/src/batch/mod.rs
//! Traits for the collaborators behind `wallet_sendCalls` handling.

use async_trait::async_trait;
use custody_types::app::{TransactionBatchRequest, TransactionRecord};
use custody_types::error::PipelineError;

/// Resolves the chain a network client is connected to.
#[async_trait]
pub trait NetworkClientResolver: Send + Sync {
    /// Returns the hex chain id of `network_client_id`.
    async fn chain_id_for_client(&self, network_client_id: &str) -> Result<String, PipelineError>;
}

/// The batch-related surface of the transaction pipeline.
#[async_trait]
pub trait TransactionBatcher: Send + Sync {
    /// Submits a batch of calls and returns its batch id.
    async fn add_transaction_batch(
        &self,
        request: TransactionBatchRequest,
    ) -> Result<String, PipelineError>;

    /// Returns the hex chain ids on which `address` can execute atomic batches.
    async fn atomic_batch_chains(&self, address: &str) -> Result<Vec<String>, PipelineError>;

    /// Returns a snapshot of the pipeline's transaction records, in pipeline order.
    fn transactions(&self) -> Vec<TransactionRecord>;
}

/// User preferences that constrain batched-call capabilities.
pub trait UpgradePreferences: Send + Sync {
    /// Hex chain ids on which the user has disabled account upgrades.
    fn disabled_account_upgrade_chains(&self) -> Vec<String>;
}
