// Path: crates/tx/src/batch/mod.rs

//! Request handling for `wallet_sendCalls` (EIP-5792) batches.

use custody_api::batch::{NetworkClientResolver, TransactionBatcher, UpgradePreferences};
use custody_api::error::BatchError;
use custody_types::app::{
    AtomicBatchCapability, ChainCapabilities, SendCalls, TransactionBatchRequest,
    TransactionReceipt,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Submits the calls of a `wallet_sendCalls` request as one batch and returns its id.
///
/// A request that names a chain must target the chain of the dApp's selected
/// network client.
pub async fn process_send_calls(
    batcher: &dyn TransactionBatcher,
    networks: &dyn NetworkClientResolver,
    params: SendCalls,
    network_client_id: &str,
) -> Result<String, BatchError> {
    let dapp_chain_id = networks.chain_id_for_client(network_client_id).await?;

    if let Some(requested) = params.chain_id.as_deref() {
        if !requested.eq_ignore_ascii_case(&dapp_chain_id) {
            return Err(BatchError::ChainMismatch {
                got: requested.to_string(),
                expected: dapp_chain_id,
            });
        }
    }

    let request = TransactionBatchRequest {
        from: params.from,
        network_client_id: network_client_id.to_string(),
        transactions: params.calls,
    };
    let batch_id = batcher.add_transaction_batch(request).await?;
    debug!(target: "custody", %batch_id, network_client_id, "batch submitted");
    Ok(batch_id)
}

/// Returns the receipt slot of every pipeline record identified by `batch_id`.
pub fn receipts_by_batch_id(
    batcher: &dyn TransactionBatcher,
    batch_id: &str,
) -> Vec<Option<TransactionReceipt>> {
    batcher
        .transactions()
        .into_iter()
        .filter(|tx| tx.id == batch_id)
        .map(|tx| tx.tx_receipt)
        .collect()
}

/// Reports, per chain, whether `address` can send atomic batches.
///
/// Chains where the user disabled account upgrades are omitted.
pub async fn capabilities(
    batcher: &dyn TransactionBatcher,
    preferences: &dyn UpgradePreferences,
    address: &str,
) -> Result<BTreeMap<String, ChainCapabilities>, BatchError> {
    let atomic_chains = batcher.atomic_batch_chains(address).await?;
    let disabled = preferences.disabled_account_upgrade_chains();

    Ok(atomic_chains
        .into_iter()
        .filter(|chain| !disabled.iter().any(|d| d.eq_ignore_ascii_case(chain)))
        .map(|chain| {
            (
                chain,
                ChainCapabilities {
                    atomic_batch: AtomicBatchCapability { supported: true },
                },
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use custody_test_utils::fixtures::signed_transaction;
    use custody_test_utils::RecordingPipeline;
    use custody_types::app::BatchCall;
    use custody_types::error::PipelineError;
    use serde_json::json;

    fn send_calls(chain_id: Option<&str>) -> SendCalls {
        SendCalls {
            version: "1.0".into(),
            from: "0xabc".into(),
            chain_id: chain_id.map(str::to_string),
            calls: vec![
                BatchCall {
                    to: Some("0xdef".into()),
                    value: Some("0x1".into()),
                    data: None,
                },
                BatchCall {
                    to: Some("0x123".into()),
                    value: None,
                    data: Some("0xabcdef".into()),
                },
            ],
        }
    }

    #[tokio::test]
    async fn matching_chain_submits_one_batch() {
        let pipeline = RecordingPipeline::new().with_network_client("mainnet", "0x1");
        let batch_id = process_send_calls(&pipeline, &pipeline, send_calls(Some("0X1")), "mainnet")
            .await
            .unwrap();

        let batches = pipeline.batches().await;
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].from, "0xabc");
        assert_eq!(batches[0].network_client_id, "mainnet");
        assert_eq!(batches[0].transactions.len(), 2);
        assert!(batch_id.starts_with("0x"));
    }

    #[tokio::test]
    async fn request_without_chain_uses_dapp_network() {
        let pipeline = RecordingPipeline::new().with_network_client("sepolia", "0xaa36a7");
        process_send_calls(&pipeline, &pipeline, send_calls(None), "sepolia")
            .await
            .unwrap();
        assert_eq!(pipeline.batches().await.len(), 1);
    }

    #[tokio::test]
    async fn mismatched_chain_is_invalid_input() {
        let pipeline = RecordingPipeline::new().with_network_client("mainnet", "0x1");
        let err = process_send_calls(&pipeline, &pipeline, send_calls(Some("0x89")), "mainnet")
            .await
            .unwrap_err();
        match err {
            BatchError::ChainMismatch { got, expected } => {
                assert_eq!(got, "0x89");
                assert_eq!(expected, "0x1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(pipeline.batches().await.is_empty());
    }

    #[tokio::test]
    async fn unknown_network_client_is_a_pipeline_error() {
        let pipeline = RecordingPipeline::new();
        let err = process_send_calls(&pipeline, &pipeline, send_calls(None), "missing")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BatchError::Pipeline(PipelineError::NetworkClientNotFound(_))
        ));
    }

    #[test]
    fn receipts_are_selected_by_batch_id() {
        let mut mined = signed_transaction("0xbatch", "0xabc");
        mined.tx_receipt = Some(TransactionReceipt {
            status: Some("0x1".into()),
            ..Default::default()
        });
        let pipeline = RecordingPipeline::new().with_transactions(vec![
            signed_transaction("tx-other", "0xabc"),
            mined,
        ]);

        let receipts = receipts_by_batch_id(&pipeline, "0xbatch");
        assert_eq!(receipts.len(), 1);
        assert_eq!(
            receipts[0].as_ref().and_then(|r| r.status.as_deref()),
            Some("0x1")
        );
        assert!(receipts_by_batch_id(&pipeline, "0xnone").is_empty());
    }

    #[tokio::test]
    async fn capabilities_exclude_disabled_chains() {
        let pipeline = RecordingPipeline::new()
            .with_atomic_chains(&["0x1", "0xaa36a7", "0x89"])
            .with_disabled_upgrade_chains(&["0xAA36A7"]);

        let caps = capabilities(&pipeline, &pipeline, "0xabc").await.unwrap();
        assert_eq!(
            serde_json::to_value(&caps).unwrap(),
            json!({
                "0x1": { "atomicBatch": { "supported": true } },
                "0x89": { "atomicBatch": { "supported": true } }
            })
        );
    }
}
