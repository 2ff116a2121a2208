//! Client configuration loaded from environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Production Gamma API host.
pub const DEFAULT_BASE_URL: &str = "https://gamma-api.polymarket.com";

/// Client configuration. Fixed once a client is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every route is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Load from `GAMMA_BASE_URL` / `GAMMA_TIMEOUT_MS`, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed("GAMMA_").from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("GAMMA_BASE_URL is not a valid URL: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err("GAMMA_BASE_URL must use http or https".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("GAMMA_TIMEOUT_MS must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://gamma-api.polymarket.com");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_ms": 250}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, 250);
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            base_url: "ftp://gamma-api.polymarket.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = ClientConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
