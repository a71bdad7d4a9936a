//! Wire types for the assistant backend's `/chat` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outgoing request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatQuery {
    pub query: String,
    pub user_id: String,
    pub session_id: String,
}

/// Successful response body. Only `answer` is read; anything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub answer: Answer,
}

impl ChatReply {
    pub fn new(answer: impl Into<Answer>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

/// The `answer` field, which the backend may send in any JSON shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<Value>", into = "Option<Value>")]
pub enum Answer {
    /// Missing or `null`
    #[default]
    Absent,
    Text(String),
    /// Object or array
    Structured(Value),
    /// Number or boolean
    Primitive(Value),
}

impl From<Option<Value>> for Answer {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Answer::Absent,
            Some(Value::String(s)) => Answer::Text(s),
            Some(v @ (Value::Object(_) | Value::Array(_))) => Answer::Structured(v),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => Answer::Primitive(v),
        }
    }
}

impl From<Value> for Answer {
    fn from(value: Value) -> Self {
        Answer::from(Some(value))
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}

impl From<Answer> for Option<Value> {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Absent => None,
            Answer::Text(s) => Some(Value::String(s)),
            Answer::Structured(v) | Answer::Primitive(v) => Some(v),
        }
    }
}
