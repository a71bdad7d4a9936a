//! Port traits — the hexagonal architecture boundary.
//!
//! Defined here in `chat-core` (pure Rust); implementations live in
//! `chat-platform` (browser adapters) and in tests (mocks).

use async_trait::async_trait;
use chat_types::{
    Result,
    wire::{ChatQuery, ChatReply},
};

// ─── Backend Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatBackendPort {
    /// Send one query and wait for the backend's answer.
    ///
    /// Non-success statuses, transport failures and unparseable bodies
    /// all come back as `Err`.
    async fn send_query(&self, query: ChatQuery) -> Result<ChatReply>;

    /// URL the backend posts to, for display
    fn endpoint(&self) -> String;
}
