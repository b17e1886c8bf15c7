// src/services/exchange_log.rs
use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::message::TokenCounts;

/// One user message and the reply generated for it.
#[derive(Clone, Debug)]
pub struct ExchangeRecord {
    pub request_id: Uuid,
    pub user_id: String,
    pub conversation_id: String,
    pub user_message: String,
    pub assistant_message: String,
    pub tokens: TokenCounts,
    pub processing_time: f64,
}

/// Sink for completed exchanges. Runs off the request path; errors are logged and dropped.
#[async_trait]
pub trait ExchangeRecorder: Send + Sync {
    async fn record(&self, record: ExchangeRecord) -> anyhow::Result<()>;
}

/// Logs each exchange. Message storage, conversation counters and usage
/// analytics are not implemented; this is the only recorder shipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingRecorder;

#[async_trait]
impl ExchangeRecorder for TracingRecorder {
    async fn record(&self, record: ExchangeRecord) -> anyhow::Result<()> {
        info!(
            request_id = %record.request_id,
            user_id = %record.user_id,
            conversation_id = %record.conversation_id,
            "Saved message for user {} in conversation {}",
            record.user_id,
            record.conversation_id
        );
        info!(
            request_id = %record.request_id,
            processing_time = record.processing_time,
            "Tokens used: {} (prompt: {}, completion: {})",
            record.tokens.total,
            record.tokens.prompt,
            record.tokens.completion
        );
        Ok(())
    }
}

/// Hand the record to the recorder on a detached task. Nothing awaits the handle
/// on the request path.
///
/// The task may start before the response has been written out; it yields once
/// first so the handler gets to return before the recorder runs.
pub fn spawn_record(recorder: Arc<dyn ExchangeRecorder>, record: ExchangeRecord) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::task::yield_now().await;
        let request_id = record.request_id;
        if let Err(e) = recorder.record(record).await {
            warn!(%request_id, error = %e, "failed to record exchange");
        }
    })
}
