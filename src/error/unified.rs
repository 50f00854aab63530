//! Error classification and recovery.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Network,
    /// Upstream markup no longer matches the scrape patterns.
    Scrape,
    Authentication,
    RateLimit,
    Server,
    Api,
    Response,
    Configuration,
    Io,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    RetryWithBackoff,
    CheckCredentials,
    CheckConfiguration,
    ReduceInputSize,
    UpdateScrapePatterns,
    ContactSupport,
}
