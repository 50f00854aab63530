//! Backend-agnostic chat interface.

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::official::Client;
use crate::unofficial::Session;

/// What a backend said back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Reply(String),
    /// The backend refreshed its API identifier; send the same question again.
    AskAgain,
}

impl Answer {
    pub const ASK_AGAIN_TEXT: &'static str = "Error: ask again!";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Reply(text) => text,
            Self::AskAgain => Self::ASK_AGAIN_TEXT,
        }
    }

    pub fn is_ask_again(&self) -> bool {
        matches!(self, Self::AskAgain)
    }

    pub fn into_reply(self) -> Option<String> {
        match self {
            Self::Reply(text) => Some(text),
            Self::AskAgain => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cleverbot backend that can be asked questions.
#[async_trait]
pub trait Chatbot: Send {
    fn backend_name(&self) -> &str;

    async fn ask(&mut self, question: &str) -> Result<Answer>;
}

#[async_trait]
impl Chatbot for Session {
    fn backend_name(&self) -> &str {
        "web"
    }

    async fn ask(&mut self, question: &str) -> Result<Answer> {
        Session::ask(self, question).await
    }
}

#[async_trait]
impl Chatbot for Client {
    fn backend_name(&self) -> &str {
        "api"
    }

    async fn ask(&mut self, question: &str) -> Result<Answer> {
        Client::ask(self, question).await.map(Answer::Reply)
    }
}
