//! Signed form body for the web conversation endpoint.
//!
//! The body is assembled by hand because the upstream checksum covers a fixed
//! byte range of it:
//!
//! ```text
//! stimulus=<q>&[vText2=..&vText3=..&]cb_settings_language=en&cb_settings_scripting=no&[sessionid=<id>&]islearning=1&icognoid=wsf&icognocheck=<md5>
//! ```

use md5::{Digest, Md5};

use super::history::History;

/// Start of the signed slice: just past `stimulus=`.
pub const CHECKSUM_OFFSET: usize = 9;
pub const CHECKSUM_LEN: usize = 26;

const SETTINGS: &str = "cb_settings_language=en&cb_settings_scripting=no&";
const TRAILER: &str = "islearning=1&icognoid=wsf&";

/// Percent-escape a question or answer for the form body.
pub fn escape(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// MD5 hex digest of bytes `9..35` of the unsigned body.
///
/// Bodies shorter than the slice are signed over whatever part of it exists.
pub fn checksum(unsigned: &str) -> String {
    let bytes = unsigned.as_bytes();
    let end = (CHECKSUM_OFFSET + CHECKSUM_LEN).min(bytes.len());
    let start = CHECKSUM_OFFSET.min(end);
    format!("{:x}", Md5::digest(&bytes[start..end]))
}

/// A fully assembled, signed request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    body: String,
    checksum: String,
}

impl SignedRequest {
    /// Build the body for an already escaped `stimulus`.
    ///
    /// Without a `session_id` the conversation is fresh, so neither history nor
    /// the session field is sent.
    pub fn build(stimulus: &str, history: &History, session_id: Option<&str>) -> Self {
        let mut body = format!("stimulus={stimulus}&");

        if session_id.is_some() {
            for (index, entry) in history.newest_first().enumerate() {
                body.push_str(&format!("vText{}={entry}&", index + 2));
            }
        }

        body.push_str(SETTINGS);

        if let Some(id) = session_id {
            body.push_str(&format!("sessionid={id}&"));
        }

        body.push_str(TRAILER);

        let checksum = checksum(&body);
        body.push_str("icognocheck=");
        body.push_str(&checksum);

        Self { body, checksum }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn into_body(self) -> String {
        self.body
    }
}
