//! Shared test helpers: a mock cleverbot host.

#![allow(dead_code)]

use cleverbot::config::CleverbotConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const ASSET_NAME: &str = "conversation-social-min.js?1476803262";

pub fn landing_page() -> String {
    format!(
        r#"<!DOCTYPE html><html><head><script src="/extras/{ASSET_NAME}"></script></head><body></body></html>"#
    )
}

pub fn script_with_identifier(id: &str) -> String {
    format!(r#"var cb={{}};cb.url="webservicemin?uc={id}&botapi=0";cb.go=function(){{}};"#)
}

pub fn config_for(server: &MockServer) -> CleverbotConfig {
    CleverbotConfig::builder()
        .base_url(server.uri())
        .api_base_url(server.uri())
        .build()
}

/// Serve a landing page and a script that yields `id`.
pub async fn mount_identity(server: &MockServer, id: &str) {
    mount_landing(server).await;
    Mock::given(method("GET"))
        .and(path("/extras/conversation-social-min.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string(script_with_identifier(id)))
        .mount(server)
        .await;
}

pub async fn mount_landing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(landing_page()))
        .mount(server)
        .await;
}

/// A reply body shaped like the web endpoint's: answer, then `\r`-separated extras.
pub fn reply_body(answer: &str) -> String {
    format!("{answer}\r\r\nCONV\r0\r")
}

/// Bodies of every POST the server has seen, in arrival order.
pub async fn posted_bodies(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r: &Request| r.method.as_str() == "POST")
        .map(|r| String::from_utf8_lossy(&r.body).into_owned())
        .collect()
}
