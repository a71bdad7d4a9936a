#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::event::*;
    use crate::wire::*;
    use crate::config::*;
    use crate::session::*;
    use crate::error::*;
    use chrono::Utc;
    use serde_json::json;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_new() {
        let now = Utc::now();
        let msg = Message::new("m1", Role::User, "Hello", now);
        assert_eq!(msg.id, "m1");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert_eq!(msg.timestamp, now);
        assert!(msg.is_user());
        assert!(!msg.is_error());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
        assert_eq!(serde_json::to_string(&Role::Error).unwrap(), r#""error""#);
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(role, Role::Error);
        assert!(serde_json::from_str::<Role>(r#""tool""#).is_err());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "You");
        assert_eq!(Role::Assistant.label(), "Laptop Intelligence");
        assert_eq!(Role::Error.label(), "System");
        assert_eq!(Role::User.avatar(), "Y");
        assert_eq!(Role::Assistant.avatar(), "AI");
        assert_eq!(Role::Error.avatar(), "!");
    }

    #[test]
    fn test_message_serialization_keeps_fields() {
        let msg = Message::new("abc", Role::Assistant, "Here are 3 matches", Utc::now());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "Here are 3 matches");
        assert!(json["timestamp"].is_string());
    }

    // ─── Wire Tests ──────────────────────────────────────────

    #[test]
    fn test_chat_query_body_shape() {
        let query = ChatQuery {
            query: "Find 16GB RAM laptops under $1200".to_string(),
            user_id: "alice".to_string(),
            session_id: "s1".to_string(),
        };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(
            json,
            r#"{"query":"Find 16GB RAM laptops under $1200","user_id":"alice","session_id":"s1"}"#
        );
    }

    #[test]
    fn test_reply_string_answer() {
        let reply: ChatReply = serde_json::from_str(r#"{"answer":"Here are 3 matches"}"#).unwrap();
        assert_eq!(reply.answer, Answer::Text("Here are 3 matches".to_string()));
    }

    #[test]
    fn test_reply_missing_answer_is_absent() {
        let reply: ChatReply = serde_json::from_str(r#"{"detail":"ok"}"#).unwrap();
        assert_eq!(reply.answer, Answer::Absent);
    }

    #[test]
    fn test_reply_null_answer_is_absent() {
        let reply: ChatReply = serde_json::from_str(r#"{"answer":null}"#).unwrap();
        assert_eq!(reply.answer, Answer::Absent);
    }

    #[test]
    fn test_reply_structured_answer() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"answer":{"products":[{"sku":"X1"}]}}"#).unwrap();
        assert_eq!(
            reply.answer,
            Answer::Structured(json!({"products": [{"sku": "X1"}]}))
        );

        let reply: ChatReply = serde_json::from_str(r#"{"answer":[1,2]}"#).unwrap();
        assert!(matches!(reply.answer, Answer::Structured(_)));
    }

    #[test]
    fn test_reply_primitive_answer() {
        let reply: ChatReply = serde_json::from_str(r#"{"answer":42}"#).unwrap();
        assert_eq!(reply.answer, Answer::Primitive(json!(42)));

        let reply: ChatReply = serde_json::from_str(r#"{"answer":false}"#).unwrap();
        assert_eq!(reply.answer, Answer::Primitive(json!(false)));
    }

    #[test]
    fn test_answer_serializes_back_to_raw_value() {
        let reply = ChatReply::new("hi");
        assert_eq!(serde_json::to_string(&reply).unwrap(), r#"{"answer":"hi"}"#);

        let reply = ChatReply::default();
        assert_eq!(serde_json::to_string(&reply).unwrap(), r#"{"answer":null}"#);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_event_serialization() {
        let event = ChatEvent::ConversationReset { session_id: "s2".to_string() };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ConversationReset"));
        assert!(json.contains("s2"));
    }

    #[test]
    fn test_chat_event_message_appended() {
        let message = Message::new("m1", Role::User, "hello", Utc::now());
        let event = ChatEvent::MessageAppended { message: message.clone() };
        let json = serde_json::to_string(&event).unwrap();
        let back: ChatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChatEvent::MessageAppended { message });
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_base_url, "http://localhost:8000");
        assert_eq!(config.chat_path, "/chat");
        assert_eq!(config.default_user_id, "guest-user");
        assert_eq!(config.request_timeout_ms, Some(60_000));
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn test_config_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint(), "http://localhost:8000/chat");

        let config = ClientConfig::with_backend("https://api.example.com/");
        assert_eq!(config.endpoint(), "https://api.example.com/chat");
    }

    #[test]
    fn test_config_with_blank_backend_keeps_default() {
        let config = ClientConfig::with_backend("   ");
        assert_eq!(config.backend_base_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_config_partial_deserialization() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"backend_base_url":"http://10.0.0.2:9000"}"#).unwrap();
        assert_eq!(config.backend_base_url, "http://10.0.0.2:9000");
        assert_eq!(config.default_user_id, "guest-user");
        assert_eq!(config.endpoint(), "http://10.0.0.2:9000/chat");
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_identity_new() {
        let identity = SessionIdentity::new("alice", "s1");
        assert_eq!(identity.user_id, "alice");
        assert_eq!(identity.session_id, "s1");
        assert_eq!(SessionIdentity::default().session_id, "");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::Http { status: 500, body: "internal error".to_string() };
        assert_eq!(err.to_string(), "Backend returned 500: internal error");
        assert_eq!(err.status(), Some(500));

        let err = ChatError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.status(), None);

        let err = ChatError::Timeout(5000);
        assert_eq!(err.to_string(), "Request timed out after 5000ms");

        let err = ChatError::Parse("expected value".to_string());
        assert_eq!(err.to_string(), "Invalid response body: expected value");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let chat_err: ChatError = serde_err.into();
        assert!(matches!(chat_err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = ChatError::Network("timeout".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
