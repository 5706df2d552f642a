// Path: crates/api/src/plugin/mock.rs

use crate::plugin::PluginHost;
use async_trait::async_trait;
use custody_types::app::SnapRequest;
use custody_types::error::PluginError;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// An in-process plugin host that replays scripted replies and records every request.
#[derive(Debug, Default)]
pub struct MockPluginHost {
    replies: Mutex<VecDeque<Result<serde_json::Value, PluginError>>>,
    requests: Mutex<Vec<SnapRequest>>,
}

impl MockPluginHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub async fn push_response(&self, response: serde_json::Value) {
        self.replies.lock().await.push_back(Ok(response));
    }

    /// Queues a failed reply.
    pub async fn push_error(&self, error: PluginError) {
        self.replies.lock().await.push_back(Err(error));
    }

    /// All requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<SnapRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl PluginHost for MockPluginHost {
    async fn handle_request(&self, request: SnapRequest) -> Result<serde_json::Value, PluginError> {
        log::info!(
            "MockPluginHost: {} called on {}",
            request.request.method,
            request.snap_id
        );
        self.requests.lock().await.push(request);
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(PluginError::Unavailable("no scripted reply".into())))
    }
}
