// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::{CompletionError, CompletionProvider, OpenAiClient};
use crate::services::exchange_log::{ExchangeRecorder, TracingRecorder};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub completions: Arc<dyn CompletionProvider>,
    pub recorder: Arc<dyn ExchangeRecorder>,
}

impl AppState {
    pub fn new(
        config: Config,
        completions: Arc<dyn CompletionProvider>,
        recorder: Arc<dyn ExchangeRecorder>,
    ) -> Self {
        Self { config, completions, recorder }
    }

    /// Production wiring: OpenAI-compatible client plus the logging recorder.
    pub fn from_config(config: Config) -> Result<Self, CompletionError> {
        let client = OpenAiClient::new(&config)?;
        Ok(Self::new(config, Arc::new(client), Arc::new(TracingRecorder)))
    }
}
