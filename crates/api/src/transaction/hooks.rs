// Path: crates/api/src/transaction/hooks.rs
//! Defines the lifecycle hooks the transaction pipeline consults before it acts.

use async_trait::async_trait;
use custody_types::app::TransactionRecord;
use custody_types::error::HookError;

/// A hook consulted immediately before the pipeline broadcasts a transaction.
///
/// The pipeline serializes lifecycle callbacks per transaction, so an
/// implementation never sees two concurrent calls for the same record.
#[async_trait]
pub trait PublishHook: Send + Sync {
    /// Returns `Ok(true)` when the pipeline should broadcast the transaction itself,
    /// `Ok(false)` when publication has been handled elsewhere.
    ///
    /// An error means the transaction could not be handed off; the pipeline is
    /// responsible for marking it failed.
    async fn before_publish(&self, record: &TransactionRecord) -> Result<bool, HookError>;
}

/// A hook consulted before the pipeline polls a pending transaction's on-chain status.
#[async_trait]
pub trait CheckPendingHook: Send + Sync {
    /// Returns `true` when the pipeline should poll, `false` to skip polling.
    ///
    /// This method cannot fail.
    async fn before_check_pending(&self, record: &TransactionRecord) -> bool;
}
