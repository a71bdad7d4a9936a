//! Turns whatever the backend sent as `answer` into displayable text.

use serde_json::Value;
use chat_types::wire::Answer;

pub const EMPTY_RESPONSE: &str = "(empty response)";

/// Total: every answer yields a string.
pub fn normalize(answer: &Answer) -> String {
    match answer {
        Answer::Absent => EMPTY_RESPONSE.to_string(),
        Answer::Text(text) => text.clone(),
        Answer::Structured(value) => pretty(value),
        Answer::Primitive(value) => value.to_string(),
    }
}

/// Same as [`normalize`] for a raw, possibly missing JSON value.
pub fn normalize_value(value: Option<&Value>) -> String {
    normalize(&Answer::from(value.cloned()))
}

fn pretty(value: &Value) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Failed to pretty-print answer payload: {}", e);
            value.to_string()
        }
    }
}
