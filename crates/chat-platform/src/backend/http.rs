//! HTTP adapter for the assistant backend's `/chat` endpoint.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use chat_core::ports::ChatBackendPort;
use chat_types::{
    ChatError, Result,
    config::ClientConfig,
    wire::{Answer, ChatQuery, ChatReply},
};

/// Posts `{query, user_id, session_id}` and reads back `{answer}`.
pub struct HttpChatBackend {
    url: String,
    timeout_ms: Option<u64>,
}

impl HttpChatBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            url: config.endpoint(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    async fn post(&self, query: &ChatQuery) -> Result<ChatReply> {
        log::debug!("POST {}", self.url);

        let response = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(query)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            let body = response.text().await.unwrap_or_default();
            log::warn!("Backend answered {} {}", status, status_text);
            return Err(http_failure(status, &body, &status_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        parse_reply(&body)
    }
}

#[async_trait(?Send)]
impl ChatBackendPort for HttpChatBackend {
    async fn send_query(&self, query: ChatQuery) -> Result<ChatReply> {
        let Some(ms) = self.timeout_ms else {
            return self.post(&query).await;
        };

        let request = Box::pin(self.post(&query));
        let timer = Box::pin(TimeoutFuture::new(ms.min(u32::MAX as u64) as u32));
        match future::select(request, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::warn!("Request to {} timed out after {}ms", self.url, ms);
                Err(ChatError::Timeout(ms))
            }
        }
    }

    fn endpoint(&self) -> String {
        self.url.clone()
    }
}

// ─── Response helpers ────────────────────────────────────────

/// Error for a non-success status. Prefers the body text, then the status
/// line, so the message always says something beyond the bare code.
pub fn http_failure(status: u16, body: &str, status_text: &str) -> ChatError {
    let body = body.trim();
    let detail = if !body.is_empty() {
        body
    } else if !status_text.trim().is_empty() {
        status_text.trim()
    } else {
        "request failed"
    };
    ChatError::Http {
        status,
        body: detail.to_string(),
    }
}

/// Parse a success body. Invalid JSON is an error; valid JSON that is not an
/// object simply has no `answer`.
pub fn parse_reply(body: &str) -> Result<ChatReply> {
    let value: Value = serde_json::from_str(body).map_err(|e| ChatError::Parse(e.to_string()))?;
    let answer = match value {
        Value::Object(mut fields) => Answer::from(fields.remove("answer")),
        _ => Answer::Absent,
    };
    Ok(ChatReply { answer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_uses_configured_endpoint() {
        let backend = HttpChatBackend::new(&ClientConfig::with_backend("https://shop.example/"));
        assert_eq!(backend.endpoint(), "https://shop.example/chat");
    }

    #[test]
    fn test_http_failure_prefers_body() {
        let err = http_failure(500, "internal error", "Internal Server Error");
        assert_eq!(err.to_string(), "Backend returned 500: internal error");
    }

    #[test]
    fn test_http_failure_falls_back_to_status_text() {
        let err = http_failure(404, "  ", "Not Found");
        assert_eq!(err.to_string(), "Backend returned 404: Not Found");

        let err = http_failure(502, "", "");
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_http_failure_keeps_json_detail() {
        let body = r#"{"detail":"Internal Server Error: boom"}"#;
        let err = http_failure(500, body, "Internal Server Error");
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_parse_reply_answer_shapes() {
        assert_eq!(
            parse_reply(r#"{"answer":"Here are 3 matches"}"#).unwrap().answer,
            Answer::Text("Here are 3 matches".to_string())
        );
        assert_eq!(
            parse_reply(r#"{"answer":{"a":1}}"#).unwrap().answer,
            Answer::Structured(json!({"a": 1}))
        );
        assert_eq!(parse_reply(r#"{"answer":null}"#).unwrap().answer, Answer::Absent);
        assert_eq!(parse_reply(r#"{}"#).unwrap().answer, Answer::Absent);
    }

    #[test]
    fn test_parse_reply_non_object_has_no_answer() {
        assert_eq!(parse_reply(r#""just text""#).unwrap().answer, Answer::Absent);
        assert_eq!(parse_reply("[1,2]").unwrap().answer, Answer::Absent);
    }

    #[test]
    fn test_parse_reply_invalid_json() {
        let err = parse_reply("<html>oops</html>").unwrap_err();
        assert!(matches!(err, ChatError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid response body"));
    }
}
