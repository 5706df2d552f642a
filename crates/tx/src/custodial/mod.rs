// Path: crates/tx/src/custodial/mod.rs

//! Deferred publication for accounts whose custodian broadcasts transactions itself.

use async_trait::async_trait;
use custody_api::accounts::AccountDirectory;
use custody_api::error::{ErrorCode, HookError, PluginError};
use custody_api::plugin::PluginHost;
use custody_api::transaction::hooks::{CheckPendingHook, PublishHook};
use custody_api::transaction::CustodialTransactionUpdater;
use custody_telemetry::sinks::{error_metrics, hook_metrics};
use custody_telemetry::time::Timer;
use custody_types::app::{
    CustodialTransaction, CustodialTransactionUpdate, HandlerType, InstitutionalSnapResponse,
    SearchParameters, SnapRequest, SnapRpcCall, TransactionRecord, TransactionStatus,
};
use custody_types::config::DeferredPublicationConfig;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Returns true when publication of transactions from `address` belongs to the custodian.
///
/// Unknown accounts, accounts without custodian options and failed lookups all
/// answer false. The answer is never cached.
pub async fn should_defer_publication(accounts: &dyn AccountDirectory, address: &str) -> bool {
    match accounts.account_by_address(address).await {
        Ok(Some(account)) => account.defers_publication(),
        Ok(None) => false,
        Err(e) => {
            warn!(
                target: "custody",
                address,
                error = %e,
                "account lookup failed; treating as not deferred"
            );
            error_metrics().inc_error("account_lookup", e.code());
            false
        }
    }
}

/// Builds the pipeline update for a custodian-published transaction.
fn submitted_update(tx: &CustodialTransaction) -> CustodialTransactionUpdate {
    CustodialTransactionUpdate {
        status: TransactionStatus::Submitted,
        hash: tx.transaction_hash.clone(),
        nonce: tx.nonce.clone(),
        gas_limit: tx.gas_limit.clone(),
        max_fee_per_gas: tx.max_fee_per_gas.clone(),
        max_priority_fee_per_gas: tx.max_priority_fee_per_gas.clone(),
    }
}

/// The pre-publication and pre-status-check hooks for custodial accounts.
///
/// Collaborators are injected as narrow capabilities; the hook holds no state of
/// its own and never mutates the transaction record directly.
#[derive(Clone)]
pub struct DeferredPublicationHook {
    accounts: Arc<dyn AccountDirectory>,
    plugin: Arc<dyn PluginHost>,
    pipeline: Arc<dyn CustodialTransactionUpdater>,
    config: DeferredPublicationConfig,
}

impl DeferredPublicationHook {
    pub fn new(
        accounts: Arc<dyn AccountDirectory>,
        plugin: Arc<dyn PluginHost>,
        pipeline: Arc<dyn CustodialTransactionUpdater>,
        config: DeferredPublicationConfig,
    ) -> Self {
        Self {
            accounts,
            plugin,
            pipeline,
            config,
        }
    }

    fn mutable_parameters_request(
        &self,
        record: &TransactionRecord,
    ) -> Result<SnapRequest, PluginError> {
        // The plugin does not know the pipeline's transaction id, so the original
        // parameters are the lookup key.
        let search = SearchParameters::from_record(record);
        let params = serde_json::to_value(&search).map_err(|e| {
            PluginError::MalformedResponse(format!("failed to encode search parameters: {}", e))
        })?;
        Ok(SnapRequest {
            snap_id: self.config.snap_id.clone(),
            origin: self.config.origin.clone(),
            handler: HandlerType::OnRpcRequest,
            request: SnapRpcCall {
                method: self.config.method.clone(),
                params,
            },
        })
    }

    /// Asks the custodian plugin for the parameters it published the transaction with.
    async fn fetch_mutable_parameters(
        &self,
        record: &TransactionRecord,
    ) -> Result<InstitutionalSnapResponse, PluginError> {
        let request = self.mutable_parameters_request(record)?;
        let raw = {
            let _timer = Timer::new(hook_metrics(), &self.config.method);
            self.plugin.handle_request(request).await?
        };
        serde_json::from_value(raw).map_err(|e| PluginError::MalformedResponse(e.to_string()))
    }

    async fn hand_off_to_custodian(&self, record: &TransactionRecord) -> Result<(), HookError> {
        let response = self.fetch_mutable_parameters(record).await?;
        let update = submitted_update(&response.transaction);
        debug!(
            target: "custody",
            tx_id = %record.id,
            custodian_tx_id = %response.transaction.custodian_transaction_id,
            hash = %update.hash,
            "custodian returned mutated parameters"
        );
        self.pipeline
            .update_custodial_transaction(&record.id, update)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl PublishHook for DeferredPublicationHook {
    async fn before_publish(&self, record: &TransactionRecord) -> Result<bool, HookError> {
        if !should_defer_publication(self.accounts.as_ref(), &record.tx_params.from).await {
            hook_metrics().inc_passthrough_publications();
            return Ok(true);
        }

        if let Err(e) = self.hand_off_to_custodian(record).await {
            warn!(
                target: "custody",
                tx_id = %record.id,
                code = e.code(),
                error = %e,
                "custodial hand-off failed"
            );
            error_metrics().inc_error("deferred_publication", e.code());
            return Err(e);
        }

        info!(target: "custody", tx_id = %record.id, "publication deferred to custodian");
        hook_metrics().inc_deferred_publications();
        Ok(false)
    }
}

#[async_trait]
impl CheckPendingHook for DeferredPublicationHook {
    async fn before_check_pending(&self, record: &TransactionRecord) -> bool {
        // Custodian-managed transactions are tracked through the custodian's own
        // notification channel.
        if should_defer_publication(self.accounts.as_ref(), &record.tx_params.from).await {
            hook_metrics().inc_pending_checks_skipped();
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use custody_api::plugin::MockPluginHost;
    use custody_test_utils::fixtures::{
        mutable_parameters_response, signed_transaction, CUSTODIAL_ADDRESS, HD_ADDRESS,
        NON_DEFERRING_CUSTODIAL_ADDRESS, UNKNOWN_ADDRESS,
    };
    use custody_test_utils::{InMemoryAccountDirectory, RecordingPipeline};

    #[tokio::test]
    async fn predicate_follows_custodian_flag() {
        let directory = InMemoryAccountDirectory::from_mock_state();
        assert!(should_defer_publication(&directory, CUSTODIAL_ADDRESS).await);
        assert!(should_defer_publication(&directory, "0xabc").await);
        assert!(!should_defer_publication(&directory, NON_DEFERRING_CUSTODIAL_ADDRESS).await);
        assert!(!should_defer_publication(&directory, HD_ADDRESS).await);
        assert!(!should_defer_publication(&directory, UNKNOWN_ADDRESS).await);
    }

    #[tokio::test]
    async fn predicate_treats_lookup_failure_as_no_deferral() {
        let directory = InMemoryAccountDirectory::from_mock_state();
        directory.fail_lookups(true);
        assert!(!should_defer_publication(&directory, CUSTODIAL_ADDRESS).await);
    }

    #[test]
    fn request_uses_configured_plugin_and_original_parameters() {
        let hook = DeferredPublicationHook::new(
            Arc::new(InMemoryAccountDirectory::default()),
            Arc::new(MockPluginHost::new()),
            Arc::new(RecordingPipeline::new()),
            DeferredPublicationConfig {
                snap_id: "local:http://localhost:8080".into(),
                ..Default::default()
            },
        );
        let request = hook
            .mutable_parameters_request(&signed_transaction("tx-1", CUSTODIAL_ADDRESS))
            .unwrap();
        assert_eq!(request.snap_id, "local:http://localhost:8080");
        assert_eq!(request.origin, "metamask");
        assert_eq!(request.handler, HandlerType::OnRpcRequest);
        assert_eq!(
            request.request.method,
            "transactions.getMutableTransactionParameters"
        );
        assert_eq!(
            request.request.params,
            serde_json::json!({
                "from": CUSTODIAL_ADDRESS,
                "to": "0xDEF",
                "value": "0x1",
                "data": "0x",
                "chainId": "0x1"
            })
        );
    }

    #[test]
    fn submitted_update_copies_custodian_fields_verbatim() {
        let response: InstitutionalSnapResponse =
            serde_json::from_value(mutable_parameters_response("0x123", "0x5")).unwrap();
        let update = submitted_update(&response.transaction);
        assert_eq!(update.status, TransactionStatus::Submitted);
        assert_eq!(update.hash, "0x123");
        assert_eq!(update.nonce, "0x5");
        assert_eq!(update.gas_limit.as_deref(), Some("0x5300"));
        assert_eq!(update.max_fee_per_gas.as_deref(), Some("0x2e90edd000"));
        assert_eq!(update.max_priority_fee_per_gas.as_deref(), Some("0x77359400"));
    }
}
