//! Client for the documented `getreply` REST API.

use tracing::debug;

use crate::config::CleverbotConfig;
use crate::error::{classify_status, CleverbotError, Result};
use crate::http::api_headers;

use super::response::{Interaction, Reply};
use super::tuning::Tweaks;

pub const GETREPLY_PATH: &str = "/getreply";

/// A conversation over the official API. Needs a key from cleverbot.com/api.
///
/// ```no_run
/// use cleverbot::official::Client;
///
/// # async fn example() -> cleverbot::error::Result<()> {
/// let mut client = Client::new("YOURAPIKEY")?;
/// client.set_wackiness(80);
/// let answer = client.ask("Hello World").await?;
/// println!("{answer} ({} interactions)", client.interaction_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    config: CleverbotConfig,
    http: reqwest::Client,
    api_key: String,
    context: Option<String>,
    tweaks: Tweaks,
    last_reply: Option<Reply>,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(CleverbotConfig::builder().api_key(api_key).build())
    }

    /// Build from configuration; fails without an API key.
    pub fn from_config(config: CleverbotConfig) -> Result<Self> {
        config.validate()?;
        let api_key = config.api_key.clone().filter(|k| !k.is_empty()).ok_or_else(|| {
            CleverbotError::Configuration(
                "API key is missing. Set CLEVERBOT_API_KEY or pass one explicitly".into(),
            )
        })?;
        let http = config.http_client()?;
        Ok(Self {
            config,
            http,
            api_key,
            context: None,
            tweaks: Tweaks::default(),
            last_reply: None,
        })
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Send one question, carrying the stored context forward.
    pub async fn ask(&mut self, question: &str) -> Result<String> {
        let url = format!("{}{}", self.config.api_host_url(), GETREPLY_PATH);

        let mut query: Vec<(&str, String)> = vec![
            ("key", self.api_key.clone()),
            ("wrapper", self.config.wrapper.clone()),
            ("input", question.to_string()),
        ];
        if let Some(ref cs) = self.context {
            query.push(("cs", cs.clone()));
        }
        query.extend(self.tweaks.query_pairs());

        debug!(contextual = self.context.is_some(), "cleverbot getreply");

        let resp = self
            .http
            .get(&url)
            .headers(api_headers())
            .query(&query)
            .send()
            .await?;

        classify_status(resp.status().as_u16())?;

        let body = resp.text().await?;
        let reply = Reply::from_json(&body)?;
        self.context = Some(reply.cs.clone());
        let output = reply.output.clone();
        self.last_reply = Some(reply);
        Ok(output)
    }

    /// Context id (`cs`) returned by the last reply.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Interactions so far, or -1 when the last reply did not say.
    pub fn interaction_count(&self) -> i64 {
        self.last_reply
            .as_ref()
            .and_then(|r| r.interaction_count)
            .unwrap_or(-1)
    }

    /// Time since the conversation started, or -1s when unknown.
    pub fn time_elapsed(&self) -> chrono::Duration {
        self.last_reply
            .as_ref()
            .and_then(|r| r.time_elapsed)
            .unwrap_or_else(unknown_duration)
    }

    /// Server time spent on the last reply, or -1s when unknown.
    pub fn time_taken(&self) -> chrono::Duration {
        self.last_reply
            .as_ref()
            .and_then(|r| r.time_taken)
            .unwrap_or_else(unknown_duration)
    }

    pub fn interactions(&self) -> &[Interaction] {
        self.last_reply
            .as_ref()
            .map(|r| r.interactions.as_slice())
            .unwrap_or_default()
    }

    pub fn last_reply(&self) -> Option<&Reply> {
        self.last_reply.as_ref()
    }

    pub fn set_wackiness(&mut self, value: u32) {
        self.tweaks.set_wackiness(value);
    }

    pub fn set_talkativeness(&mut self, value: u32) {
        self.tweaks.set_talkativeness(value);
    }

    pub fn set_attentiveness(&mut self, value: u32) {
        self.tweaks.set_attentiveness(value);
    }

    pub fn tweaks(&self) -> &Tweaks {
        &self.tweaks
    }

    /// Forget the context so the next question starts a new conversation.
    pub fn reset(&mut self) {
        self.context = None;
        self.last_reply = None;
    }
}

fn unknown_duration() -> chrono::Duration {
    chrono::Duration::seconds(-1)
}
