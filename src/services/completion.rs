// src/services/completion.rs
//! Outbound client for an OpenAI-compatible chat-completion API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::message::{ChatMessage, TokenCounts};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("completion response contained no choices")]
    MissingChoice,

    #[error("completion response contained no usage data")]
    MissingUsage,

    #[error("completion response contained no message content")]
    MissingContent,
}

/// Body of `POST {base}/chat/completions`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub content: String,
    pub usage: TokenCounts,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, CompletionError>;
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl ApiResponse {
    fn into_completion(self) -> Result<Completion, CompletionError> {
        let choice = self.choices.into_iter().next().ok_or(CompletionError::MissingChoice)?;
        let usage = self.usage.ok_or(CompletionError::MissingUsage)?;
        let content = choice.message.content.ok_or(CompletionError::MissingContent)?;

        Ok(Completion {
            content,
            // Taken as reported; the total is never recomputed here.
            usage: TokenCounts {
                prompt: usage.prompt_tokens,
                completion: usage.completion_tokens,
                total: usage.total_tokens,
            },
        })
    }
}

#[derive(Clone, Debug)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/chat/completions", config.base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, CompletionError> {
        info!(
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CompletionError::Status { status, body });
        }

        debug!(bytes = body.len(), "chat completion response received");
        serde_json::from_str::<ApiResponse>(&body)?.into_completion()
    }
}
