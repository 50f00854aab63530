//! Tests for the official REST API client.

use cleverbot::chatbot::Chatbot;
use cleverbot::config::CleverbotConfig;
use cleverbot::error::{CleverbotError, ErrorCategory};
use cleverbot::official::{Client, Interaction};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    let config = CleverbotConfig::builder()
        .api_base_url(server.uri())
        .api_key("test-key")
        .build();
    Client::from_config(config).expect("client")
}

#[tokio::test]
async fn ask_returns_output_and_stores_context() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getreply"))
        .and(query_param("key", "test-key"))
        .and(query_param("wrapper", "cleverbot-rs"))
        .and(query_param("input", "Hello World"))
        .and(header("pragma", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "hi",
            "cs": "abc",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let answer = client.ask("Hello World").await.unwrap();

    assert_eq!(answer, "hi");
    assert_eq!(client.context(), Some("abc"));
    assert_eq!(client.interaction_count(), -1);
    assert_eq!(client.time_taken(), chrono::Duration::seconds(-1));
}

#[tokio::test]
async fn context_and_tweaks_are_sent_on_next_ask() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getreply"))
        .and(query_param("cs", "abc"))
        .and(query_param("cb_settings_tweak1", "100"))
        .and(query_param("cb_settings_tweak3", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "second",
            "cs": "abcd",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/getreply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "first",
            "cs": "abc",
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    assert_eq!(client.ask("one").await.unwrap(), "first");

    client.set_wackiness(150);
    client.set_attentiveness(42);
    assert_eq!(client.ask("two").await.unwrap(), "second");
    assert_eq!(client.context(), Some("abcd"));
}

#[tokio::test]
async fn reply_metadata_is_exposed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getreply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "fine",
            "cs": "ctx",
            "interaction_count": "2",
            "time_elapsed": "15",
            "time_taken": "356",
            "interaction_1": "how are you",
            "interaction_1_other": "fine",
            "interaction_2": "hello",
            "interaction_2_other": "hi",
            "interaction_3": "",
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.ask("how are you").await.unwrap();

    assert_eq!(client.interaction_count(), 2);
    assert_eq!(client.time_elapsed(), chrono::Duration::seconds(15));
    assert_eq!(client.time_taken(), chrono::Duration::milliseconds(356));
    assert_eq!(
        client.interactions(),
        &[
            Interaction {
                question: "how are you".into(),
                answer: "fine".into(),
            },
            Interaction {
                question: "hello".into(),
                answer: "hi".into(),
            },
        ]
    );

    client.reset();
    assert_eq!(client.context(), None);
    assert_eq!(client.interaction_count(), -1);
}

#[tokio::test]
async fn status_codes_map_to_named_errors() {
    for status in [401u16, 404, 413, 502, 503, 504, 418] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getreply"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let mut client = client_for(&server);
        let err = client.ask("hello").await.expect_err("status should fail");
        let expected = match status {
            401 => matches!(err, CleverbotError::KeyInvalid),
            404 => matches!(err, CleverbotError::NotFound),
            413 => matches!(err, CleverbotError::PayloadTooLarge),
            502 | 504 => matches!(err, CleverbotError::UpstreamUnavailable { status: s } if s == status),
            503 => matches!(err, CleverbotError::RateLimited),
            _ => matches!(err, CleverbotError::UnexpectedStatus { status: s } if s == status),
        };
        assert!(expected, "status {status} produced {err:?}");
        assert_eq!(client.context(), None);
    }
}

#[tokio::test]
async fn missing_output_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getreply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cs": "abc"})))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client.ask("hello").await.expect_err("should fail");

    assert!(matches!(&err, CleverbotError::MalformedResponse(_)));
    assert_eq!(err.category(), ErrorCategory::Response);
    assert_eq!(client.context(), None);
}

#[tokio::test]
async fn client_works_through_chatbot_trait() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getreply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "via trait",
            "cs": "abc",
        })))
        .mount(&server)
        .await;

    let mut bot: Box<dyn Chatbot> = Box::new(client_for(&server));
    assert_eq!(bot.backend_name(), "api");
    let answer = bot.ask("hi").await.unwrap();
    assert_eq!(answer.as_str(), "via trait");
    assert!(!answer.is_ask_again());
}
