//! Convenience re-exports for common use.

pub use crate::chatbot::{Answer, Chatbot};
pub use crate::config::CleverbotConfig;
pub use crate::error::{CleverbotError, Result};
pub use crate::official::{Client, Interaction, Tweaks};
pub use crate::unofficial::{Session, SessionState};
