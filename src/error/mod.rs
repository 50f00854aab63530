//! Error types for the cleverbot client.

pub mod unified;

pub use unified::{ErrorCategory, RecoverySuggestion};

use thiserror::Error;

/// Primary error type for all client operations.
///
/// Values are built fresh at each failure site and carry their own context
/// (the URL that was scraped, the status that was returned).
#[derive(Error, Debug)]
pub enum CleverbotError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Script asset reference not found in {url}")]
    AssetNotFound { url: String },

    #[error("API identifier not found in {url}")]
    IdentifierNotFound { url: String },

    #[error("401: unauthorised due to missing or invalid API key")]
    KeyInvalid,

    #[error("404: API not found")]
    NotFound,

    #[error("413: request too large, requests over 16Kb are rejected")]
    PayloadTooLarge,

    #[error("{status}: unable to get reply from API server")]
    UpstreamUnavailable { status: u16 },

    #[error("503: too many requests from a single IP address or API key")]
    RateLimited,

    #[error("Got {status} response code")]
    UnexpectedStatus { status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CleverbotError {
    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::AssetNotFound { .. } | Self::IdentifierNotFound { .. } => ErrorCategory::Scrape,
            Self::KeyInvalid => ErrorCategory::Authentication,
            Self::RateLimited => ErrorCategory::RateLimit,
            Self::UpstreamUnavailable { .. } => ErrorCategory::Server,
            Self::NotFound | Self::PayloadTooLarge => ErrorCategory::Api,
            Self::UnexpectedStatus { status } => match status {
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::MalformedResponse(_) | Self::Serialization(_) => ErrorCategory::Response,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    /// Whether this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit | ErrorCategory::Network | ErrorCategory::Server
        )
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        if matches!(self, Self::PayloadTooLarge) {
            return RecoverySuggestion::ReduceInputSize;
        }
        match self.category() {
            ErrorCategory::Authentication => RecoverySuggestion::CheckCredentials,
            ErrorCategory::RateLimit | ErrorCategory::Network | ErrorCategory::Server => {
                RecoverySuggestion::RetryWithBackoff
            }
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            ErrorCategory::Scrape => RecoverySuggestion::UpdateScrapePatterns,
            _ => RecoverySuggestion::ContactSupport,
        }
    }
}

/// Map an official API status code onto the fixed error taxonomy.
pub fn classify_status(status: u16) -> Result<()> {
    match status {
        200 => Ok(()),
        401 => Err(CleverbotError::KeyInvalid),
        404 => Err(CleverbotError::NotFound),
        413 => Err(CleverbotError::PayloadTooLarge),
        502 | 504 => Err(CleverbotError::UpstreamUnavailable { status }),
        503 => Err(CleverbotError::RateLimited),
        _ => Err(CleverbotError::UnexpectedStatus { status }),
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CleverbotError>;
