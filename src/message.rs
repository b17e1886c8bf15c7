// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub conversation_id: String,
    pub message: String,
    /// Accepted on the wire but never consulted; knowledge-base lookup is not implemented.
    #[serde(default)]
    pub knowledge_base_id: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[serde(default = "default_settings")]
    pub settings: HashMap<String, Value>,
}

fn default_settings() -> HashMap<String, Value> {
    HashMap::from([("temperature".to_string(), Value::from(DEFAULT_TEMPERATURE))])
}

impl ChatRequest {
    /// Temperature requested in `settings`, falling back to 0.7 when absent or null.
    /// A present value that is not a number is rejected.
    pub fn temperature(&self) -> Result<f64, String> {
        match self.settings.get("temperature") {
            None | Some(Value::Null) => Ok(DEFAULT_TEMPERATURE),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| format!("invalid temperature setting: {}", n)),
            Some(other) => Err(format!("invalid temperature setting: {}", other)),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub conversation_id: String,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ResponseMetadata {
    pub tokens: TokenCounts,
    #[serde(rename = "processingTime")]
    pub processing_time: f64,
    pub model: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenCounts {
    pub prompt: u32,
    pub completion: u32,
    pub total: u32,
}
