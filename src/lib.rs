//! Async client for cleverbot.com.
//!
//! Two backends are provided:
//!
//! - [`official::Client`] talks to the documented REST API and needs a key.
//! - [`unofficial::Session`] talks to the site's own conversation endpoint,
//!   scraping the API identifier and signing each request.
//!
//! # Quick Start
//!
//! ```no_run
//! use cleverbot::prelude::*;
//!
//! # async fn example() -> cleverbot::error::Result<()> {
//! let session = Session::new(CleverbotConfig::default()).await?;
//! let answer = session.ask("Hello!").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

pub mod chatbot;
pub mod config;
pub mod error;
pub mod http;
pub mod official;
pub mod prelude;
pub mod unofficial;

#[cfg(feature = "cli")]
pub mod cli;
