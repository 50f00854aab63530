//! Client for cleverbot.com's own web conversation endpoint.
//!
//! No API key is needed, but the endpoint is undocumented: requests are signed
//! with an MD5 token, carry the recent conversation as `vText` fields, and are
//! addressed with an identifier scraped from the site's scripts.

pub mod history;
pub mod payload;
pub mod reply;
pub mod resolver;
pub mod session;

pub use history::History;
pub use payload::SignedRequest;
pub use reply::RawReply;
pub use resolver::ApiIdentityResolver;
pub use session::Session;

use strum::{Display, EnumString};

/// Whether the server has assigned this conversation an id yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SessionState {
    Fresh,
    Contextual,
}
