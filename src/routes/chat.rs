use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::error;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::processor::process_message,
    state::SharedState,
};

pub async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Chatbot AI Service is running" }))
}

pub async fn process_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let conversation_id = payload.conversation_id.clone();

    match process_message(&state, payload).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!(%conversation_id, error = %e, "Error processing message");
            Err(e)
        }
    }
}
