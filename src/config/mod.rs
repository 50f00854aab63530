//! Client configuration (layered: code > env > defaults).

use std::time::Duration;

use bon::Builder;
use reqwest::Url;

use crate::error::{CleverbotError, Result};

/// Host scraped by the web conversation endpoint.
pub const DEFAULT_BASE_URL: &str = "http://www.cleverbot.com";
/// Host of the documented REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.cleverbot.com";
/// Number of history entries (questions and answers) kept per conversation.
pub const DEFAULT_HISTORY_CAP: usize = 16;
pub const DEFAULT_WRAPPER: &str = "cleverbot-rs";

/// Immutable configuration handed to a [`Session`](crate::unofficial::Session)
/// or [`Client`](crate::official::Client) at construction.
///
/// ```
/// use cleverbot::config::CleverbotConfig;
///
/// let config = CleverbotConfig::builder()
///     .api_key("my-key")
///     .history_cap(8)
///     .build();
/// assert_eq!(config.base_url, "http://www.cleverbot.com");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct CleverbotConfig {
    #[builder(default = DEFAULT_BASE_URL.to_string(), into)]
    pub base_url: String,
    #[builder(default = DEFAULT_API_BASE_URL.to_string(), into)]
    pub api_base_url: String,
    #[builder(into)]
    pub api_key: Option<String>,
    #[builder(default = DEFAULT_HISTORY_CAP)]
    pub history_cap: usize,
    #[builder(default = Duration::from_secs(60))]
    pub timeout: Duration,
    #[builder(default = DEFAULT_WRAPPER.to_string(), into)]
    pub wrapper: String,
}

impl Default for CleverbotConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CleverbotConfig {
    /// Load from environment variables (CLEVERBOT_API_KEY, CLEVERBOT_BASE_URL, etc.).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let history_cap = std::env::var("CLEVERBOT_HISTORY_CAP").ok().and_then(|raw| {
            match raw.parse::<usize>() {
                Ok(cap) => Some(cap),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "ignoring CLEVERBOT_HISTORY_CAP");
                    None
                }
            }
        });

        Self::builder()
            .maybe_api_key(std::env::var("CLEVERBOT_API_KEY").ok())
            .maybe_base_url(std::env::var("CLEVERBOT_BASE_URL").ok())
            .maybe_api_base_url(std::env::var("CLEVERBOT_API_BASE_URL").ok())
            .maybe_history_cap(history_cap)
            .build()
    }

    /// Reject settings the protocol cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.history_cap == 0 || self.history_cap % 2 != 0 {
            return Err(CleverbotError::Configuration(format!(
                "history_cap must be a positive even number, got {}",
                self.history_cap
            )));
        }
        for (name, raw) in [("base_url", &self.base_url), ("api_base_url", &self.api_base_url)] {
            Url::parse(raw).map_err(|e| {
                CleverbotError::Configuration(format!("invalid {name} '{raw}': {e}"))
            })?;
        }
        Ok(())
    }

    /// `base_url` without a trailing slash.
    pub fn host_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// `api_base_url` without a trailing slash.
    pub fn api_host_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Value for the `Host` header sent to the scrape host (`host[:port]`).
    pub fn host_header(&self) -> Result<String> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            CleverbotError::Configuration(format!("invalid base_url '{}': {e}", self.base_url))
        })?;
        let host = url.host_str().ok_or_else(|| {
            CleverbotError::Configuration(format!("base_url '{}' has no host", self.base_url))
        })?;
        Ok(match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }

    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(2)
            .build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_cleverbot() {
        let config = CleverbotConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.history_cap, 16);
        assert_eq!(config.wrapper, "cleverbot-rs");
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn odd_or_zero_history_cap_is_rejected() {
        for cap in [0, 3, 15] {
            let config = CleverbotConfig::builder().history_cap(cap).build();
            assert!(matches!(
                config.validate(),
                Err(CleverbotError::Configuration(msg)) if msg.contains("history_cap")
            ));
        }
    }

    #[test]
    fn unparsable_base_url_is_rejected() {
        let config = CleverbotConfig::builder().base_url("not a url").build();
        assert!(matches!(config.validate(), Err(CleverbotError::Configuration(_))));
    }

    #[test]
    fn host_header_keeps_explicit_port() {
        let config = CleverbotConfig::builder().base_url("http://127.0.0.1:8080/").build();
        assert_eq!(config.host_header().unwrap(), "127.0.0.1:8080");
        assert_eq!(config.host_url(), "http://127.0.0.1:8080");

        let config = CleverbotConfig::default();
        assert_eq!(config.host_header().unwrap(), "www.cleverbot.com");
    }
}
