// src/config.rs
use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub client_url: String,
    pub base_url: String,
    pub bind_addr: SocketAddr,
    pub request_timeout: Option<Duration>,
}

// Keep the key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("client_url", &self.client_url)
            .field("base_url", &self.base_url)
            .field("bind_addr", &self.bind_addr)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment. Call `dotenvy::dotenv()` first
    /// if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: "REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key: get("OPENAI_API_KEY").unwrap_or_default(),
            model: get("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            client_url: get("CLIENT_URL").unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_addr,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.model, "gpt-4");
        assert_eq!(cfg.client_url, "http://localhost:3000");
        assert_eq!(cfg.base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.bind_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert!(cfg.api_key.is_empty());
        assert!(cfg.request_timeout.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("AI_MODEL", "gpt-4o-mini"),
            ("CLIENT_URL", "https://app.example.com"),
            ("OPENAI_BASE_URL", "http://127.0.0.1:9000/v1/"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("REQUEST_TIMEOUT_SECS", "30"),
        ])
        .unwrap();
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.client_url, "https://app.example.com");
        assert_eq!(cfg.base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn blank_model_falls_back_to_default() {
        let cfg = config_from(&[("AI_MODEL", "  ")]).unwrap();
        assert_eq!(cfg.model, DEFAULT_MODEL);
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = config_from(&[("BIND_ADDR", "not-an-addr")]).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        assert!(config_from(&[("REQUEST_TIMEOUT_SECS", "soon")]).is_err());
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = config_from(&[("OPENAI_API_KEY", "sk-secret")]).unwrap();
        assert!(!format!("{:?}", cfg).contains("sk-secret"));
    }
}
