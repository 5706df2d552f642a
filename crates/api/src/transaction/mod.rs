// Path: crates/api/src/transaction/mod.rs
//! Defines the pipeline capability the hooks use to push custodian values back.

use async_trait::async_trait;
use custody_types::app::CustodialTransactionUpdate;
use custody_types::error::PipelineError;

pub mod hooks;

/// The update operation exposed by the hosting transaction pipeline.
#[async_trait]
pub trait CustodialTransactionUpdater: Send + Sync {
    /// Overwrites the custodian-owned fields of transaction `id`.
    ///
    /// If the pipeline has already dropped the transaction this may be a no-op or
    /// return `PipelineError::TransactionNotFound`; either is acceptable to callers.
    async fn update_custodial_transaction(
        &self,
        id: &str,
        update: CustodialTransactionUpdate,
    ) -> Result<(), PipelineError>;
}
