//! Raw reply bodies from the web conversation endpoint.

const TERMINATOR: u8 = b'\r';
const STALE_MARKER: &str = "<html>";

/// Reply text: everything before the first carriage return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    content: String,
}

impl RawReply {
    pub fn from_body(body: &[u8]) -> Self {
        let end = body
            .iter()
            .position(|&b| b == TERMINATOR)
            .unwrap_or(body.len());
        Self {
            content: String::from_utf8_lossy(&body[..end]).into_owned(),
        }
    }

    /// An HTML page instead of delimited text means the API id went stale.
    pub fn is_stale(&self) -> bool {
        self.content.contains(STALE_MARKER)
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn into_text(self) -> String {
        self.content
    }
}
