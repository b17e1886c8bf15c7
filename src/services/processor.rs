// src/services/processor.rs
use std::time::Instant;

use tracing::info;
use uuid::Uuid;

use super::completion::CompletionRequest;
use super::exchange_log::{ExchangeRecord, spawn_record};
use crate::{
    error::AppError,
    message::{ChatMessage, ChatRequest, ChatResponse, ResponseMetadata},
    state::AppState,
};

/// Prior history in order, then the new message as a `user` turn.
pub fn build_messages(history: &[ChatMessage], message: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.extend_from_slice(history);
    messages.push(ChatMessage::new("user", message));
    messages
}

/// Forward one request to the completion provider and map the reply.
///
/// The exchange is handed to the recorder only after the response has been
/// built; a failed call returns before anything is scheduled.
pub async fn process_message(state: &AppState, request: ChatRequest) -> Result<ChatResponse, AppError> {
    let started = Instant::now();
    let request_id = Uuid::new_v4();

    let temperature = request.temperature().map_err(AppError::Internal)?;
    let completion_request = CompletionRequest {
        model: state.config.model.clone(),
        messages: build_messages(&request.history, &request.message),
        temperature,
    };

    info!(
        %request_id,
        user_id = %request.user_id,
        conversation_id = %request.conversation_id,
        history = request.history.len(),
        "processing message"
    );

    let completion = state.completions.complete(completion_request).await?;
    let processing_time = started.elapsed().as_secs_f64();

    let response = ChatResponse {
        message: completion.content.clone(),
        conversation_id: request.conversation_id.clone(),
        metadata: ResponseMetadata {
            tokens: completion.usage,
            processing_time,
            model: state.config.model.clone(),
        },
    };

    // Detached; the reply never waits on the recorder.
    spawn_record(
        state.recorder.clone(),
        ExchangeRecord {
            request_id,
            user_id: request.user_id,
            conversation_id: request.conversation_id,
            user_message: request.message,
            assistant_message: completion.content,
            tokens: completion.usage,
            processing_time,
        },
    );

    Ok(response)
}
