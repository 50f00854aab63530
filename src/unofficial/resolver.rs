//! Scrapes the live API identifier from the host's front-end assets.
//!
//! The identifier is baked into a versioned script referenced by the landing
//! page and changes whenever the site redeploys, so it is looked up in two
//! hops: landing page -> script name -> identifier.

use std::sync::OnceLock;

use regex::Regex;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::error::{CleverbotError, Result};

/// Directory the versioned scripts are served from.
pub const ASSET_DIR: &str = "/extras/";

fn asset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"conversation-social-min\.js\?\d+").expect("asset pattern is valid")
    })
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"["']webservicemin\?uc=(\d+)[^"']*["']"#)
            .expect("identifier pattern is valid")
    })
}

/// Find the versioned script name (`conversation-social-min.js?<n>`) in page markup.
pub fn find_asset(markup: &str) -> Option<&str> {
    asset_pattern().find(markup).map(|m| m.as_str())
}

/// Find the numeric identifier in a quoted `webservicemin?uc=<n>` fragment.
pub fn find_identifier(script: &str) -> Option<&str> {
    identifier_pattern()
        .captures(script)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Two-hop scraper for the web endpoint's API identifier.
#[derive(Debug, Clone)]
pub struct ApiIdentityResolver {
    client: reqwest::Client,
    headers: HeaderMap,
}

impl ApiIdentityResolver {
    pub fn new(client: reqwest::Client, headers: HeaderMap) -> Self {
        Self { client, headers }
    }

    /// Resolve the current identifier for the host at `base_url`.
    pub async fn resolve(&self, base_url: &str) -> Result<String> {
        let base = base_url.trim_end_matches('/');

        let page = self.fetch(base).await?;
        let asset = find_asset(&page).ok_or_else(|| CleverbotError::AssetNotFound {
            url: base.to_string(),
        })?;
        let asset_url = format!("{base}{ASSET_DIR}{asset}");
        debug!(asset = %asset_url, "cleverbot resolver found script asset");

        let script = self.fetch(&asset_url).await?;
        let identifier = find_identifier(&script)
            .ok_or_else(|| CleverbotError::IdentifierNotFound { url: asset_url.clone() })?;
        debug!(identifier, "cleverbot resolver found api identifier");

        Ok(identifier.to_string())
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_asset_matches_versioned_script() {
        let markup = r#"<script src="/extras/conversation-social-min.js?1476803262"></script>"#;
        assert_eq!(find_asset(markup), Some("conversation-social-min.js?1476803262"));
    }

    #[test]
    fn find_asset_requires_cache_buster() {
        assert_eq!(find_asset(r#"<script src="/extras/conversation-social-min.js">"#), None);
        assert_eq!(find_asset("<html></html>"), None);
    }

    #[test]
    fn find_identifier_reads_quoted_fragment() {
        let script = r#"var a=1;cleverbot.url="webservicemin?uc=777&botapi=x";"#;
        assert_eq!(find_identifier(script), Some("777"));

        let single = "url:'webservicemin?uc=31415'";
        assert_eq!(find_identifier(single), Some("31415"));
    }

    #[test]
    fn find_identifier_ignores_unquoted_or_non_numeric() {
        assert_eq!(find_identifier("webservicemin?uc=777"), None);
        assert_eq!(find_identifier(r#""webservicemin?uc=abc""#), None);
    }
}
