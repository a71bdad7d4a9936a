use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_USER_ID: &str = "guest-user";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Client configuration. Resolved once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub backend_base_url: String,
    pub chat_path: String,
    /// Sent as `user_id` when the user field is blank
    pub default_user_id: String,
    /// `None` disables the client-side timeout
    pub request_timeout_ms: Option<u64>,
    pub id_strategy: IdStrategy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            default_user_id: DEFAULT_USER_ID.to_string(),
            request_timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl ClientConfig {
    /// Default config pointed at `base_url`. Blank input keeps the default URL.
    pub fn with_backend(base_url: &str) -> Self {
        let mut config = Self::default();
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            config.backend_base_url = trimmed.to_string();
        }
        config
    }

    /// Full URL of the chat endpoint
    pub fn endpoint(&self) -> String {
        let base = self.backend_base_url.trim_end_matches('/');
        let path = self.chat_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

/// Source of message and session identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdStrategy {
    /// Random UUID v4 from the platform's crypto source
    #[default]
    Uuid,
    /// Pseudo-random alphanumeric ids, for hosts without a crypto source
    Fallback,
}
