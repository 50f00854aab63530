//! Decoding of `getreply` JSON bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CleverbotError, Result};

/// One earlier exchange as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub question: String,
    pub answer: String,
}

/// A decoded `getreply` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub cs: String,
    pub interaction_count: Option<i64>,
    pub time_elapsed: Option<chrono::Duration>,
    pub time_taken: Option<chrono::Duration>,
    /// `interaction_1`, `interaction_2`, ... in server order (most recent first).
    pub interactions: Vec<Interaction>,
}

impl Reply {
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        let obj = value
            .as_object()
            .ok_or_else(|| CleverbotError::MalformedResponse("expected a JSON object".into()))?;

        Ok(Self {
            output: required_str(obj, "output")?,
            cs: required_str(obj, "cs")?,
            interaction_count: int_field(obj, "interaction_count"),
            time_elapsed: int_field(obj, "time_elapsed").and_then(chrono::Duration::try_seconds),
            time_taken: int_field(obj, "time_taken").and_then(chrono::Duration::try_milliseconds),
            interactions: interactions(obj),
        })
    }
}

fn required_str(obj: &Map<String, Value>, key: &str) -> Result<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| CleverbotError::MalformedResponse(format!("{key}: not a string")))
}

/// The API sends numbers as strings; accept either.
fn int_field(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    match obj.get(key)? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

/// Numbered pairs, stopping at the first missing or empty question.
fn interactions(obj: &Map<String, Value>) -> Vec<Interaction> {
    (1..)
        .map_while(|n| {
            let question = obj.get(&format!("interaction_{n}"))?.as_str()?;
            if question.is_empty() {
                return None;
            }
            let answer = obj
                .get(&format!("interaction_{n}_other"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            Some(Interaction {
                question: question.to_string(),
                answer: answer.to_string(),
            })
        })
        .collect()
}
