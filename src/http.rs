//! Header sets for the two cleverbot endpoints.

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_CHARSET, ACCEPT_LANGUAGE, CACHE_CONTROL, CONTENT_TYPE,
    COOKIE, HOST, PRAGMA, REFERER, USER_AGENT,
};

use crate::config::CleverbotConfig;
use crate::error::{CleverbotError, Result};

/// The web endpoint only answers requests that look like they came from its own page.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/54.0.2840.71 Safari/537.36";
pub const WRAPPER_USER_AGENT: &str = "cleverbot-rs https://crates.io/crates/cleverbot";
pub const SESSION_COOKIE: &str = "XVIS=TEI939AFFIAGAYQZ";

/// Response header carrying the conversation id on the web endpoint.
pub const CONVERSATION_ID_HEADER: &str = "CBCONVID";

/// Headers for the web conversation endpoint and its page assets.
pub fn browser_headers(config: &CleverbotConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain;charset=UTF-8"),
    );
    headers.insert(HOST, header_value(&config.host_header()?)?);
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(
        ACCEPT_CHARSET,
        HeaderValue::from_static("ISO-8859-1,utf-8;q=0.7,*;q=0.3"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.8"),
    );
    headers.insert(REFERER, header_value(&format!("{}/", config.host_url()))?);
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(COOKIE, HeaderValue::from_static(SESSION_COOKIE));
    Ok(headers)
}

/// Headers for the documented REST API.
pub fn api_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(WRAPPER_USER_AGENT));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain;charset=UTF-8"),
    );
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

fn header_value(raw: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw)
        .map_err(|e| CleverbotError::Configuration(format!("invalid header value '{raw}': {e}")))
}
