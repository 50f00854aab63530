//! Conversation state and the `ask` protocol for the web endpoint.

use reqwest::header::HeaderMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::chatbot::Answer;
use crate::config::CleverbotConfig;
use crate::error::{CleverbotError, Result};
use crate::http::{browser_headers, CONVERSATION_ID_HEADER};

use super::history::History;
use super::payload::{escape, SignedRequest};
use super::reply::RawReply;
use super::resolver::ApiIdentityResolver;
use super::SessionState;

/// Path the signed form is posted to; the identifier goes in `uc`.
pub const WEBSERVICE_PATH: &str = "/webservicemin";

#[derive(Debug)]
struct Conversation {
    context_id: Option<String>,
    history: History,
    api_identifier: String,
}

/// One logical conversation with the web endpoint.
///
/// Every `ask` holds the conversation lock from payload assembly until the
/// reply is folded back into state, so concurrent callers are serialized.
/// Use one `Session` per conversation.
///
/// ```no_run
/// use cleverbot::unofficial::Session;
/// use cleverbot::config::CleverbotConfig;
///
/// # async fn example() -> cleverbot::error::Result<()> {
/// let session = Session::new(CleverbotConfig::default()).await?;
/// let answer = session.ask("Hello World").await?;
/// if answer.is_ask_again() {
///     // the API id was refreshed; send the question again
///     let answer = session.ask("Hello World").await?;
///     println!("{answer}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    config: CleverbotConfig,
    client: reqwest::Client,
    headers: HeaderMap,
    resolver: ApiIdentityResolver,
    state: Mutex<Conversation>,
}

impl Session {
    /// Create a session and resolve the initial API identifier.
    pub async fn new(config: CleverbotConfig) -> Result<Self> {
        let client = config.http_client()?;
        Self::with_http_client(config, client).await
    }

    /// Like [`Session::new`] but reusing a caller-supplied HTTP client.
    pub async fn with_http_client(config: CleverbotConfig, client: reqwest::Client) -> Result<Self> {
        config.validate()?;
        let headers = browser_headers(&config)?;
        let resolver = ApiIdentityResolver::new(client.clone(), headers.clone());
        let api_identifier = resolver.resolve(config.host_url()).await?;

        Ok(Self {
            state: Mutex::new(Conversation {
                context_id: None,
                history: History::new(config.history_cap),
                api_identifier,
            }),
            config,
            client,
            headers,
            resolver,
        })
    }

    /// Send one question.
    ///
    /// Returns [`Answer::AskAgain`] when the endpoint answered with an HTML
    /// page: the identifier has been re-resolved and the caller should ask
    /// again. The question is not retried here and history is left untouched.
    /// Any other non-2xx reply is an error and leaves the conversation as it was.
    pub async fn ask(&self, question: &str) -> Result<Answer> {
        let mut conversation = self.state.lock().await;

        let stimulus = escape(question);
        let request = SignedRequest::build(
            &stimulus,
            &conversation.history,
            conversation.context_id.as_deref(),
        );
        let url = format!("{}{}", self.config.host_url(), WEBSERVICE_PATH);

        debug!(
            uc = %conversation.api_identifier,
            contextual = conversation.context_id.is_some(),
            history = conversation.history.len(),
            "cleverbot ask"
        );

        let resp = self
            .client
            .post(&url)
            .query(&[("uc", conversation.api_identifier.as_str())])
            .headers(self.headers.clone())
            .body(request.into_body())
            .send()
            .await?;

        let status = resp.status();
        let context_id = resp
            .headers()
            .get(CONVERSATION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = resp.bytes().await?;
        let reply = RawReply::from_body(&body);

        if reply.is_stale() {
            warn!(
                uc = %conversation.api_identifier,
                "cleverbot returned a page instead of a reply, re-resolving api identifier"
            );
            conversation.api_identifier = self.resolver.resolve(self.config.host_url()).await?;
            return Ok(Answer::AskAgain);
        }

        if !status.is_success() {
            warn!(status = status.as_u16(), "cleverbot web endpoint returned an error status");
            return Err(CleverbotError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        // An empty or missing id drops the conversation back to a fresh one.
        conversation.context_id = context_id.filter(|id| !id.is_empty());

        let answer = reply.into_text();
        conversation.history.push_turn(stimulus, escape(&answer));
        Ok(Answer::Reply(answer))
    }

    pub async fn state(&self) -> SessionState {
        if self.state.lock().await.context_id.is_some() {
            SessionState::Contextual
        } else {
            SessionState::Fresh
        }
    }

    pub async fn context_id(&self) -> Option<String> {
        self.state.lock().await.context_id.clone()
    }

    /// Escaped history entries, oldest first.
    pub async fn history(&self) -> Vec<String> {
        self.state.lock().await.history.entries().to_vec()
    }

    pub async fn api_identifier(&self) -> String {
        self.state.lock().await.api_identifier.clone()
    }

    /// Start a new conversation, keeping the resolved identifier.
    pub async fn reset(&self) {
        let mut conversation = self.state.lock().await;
        conversation.context_id = None;
        conversation.history.clear();
    }

    pub fn config(&self) -> &CleverbotConfig {
        &self.config
    }
}
