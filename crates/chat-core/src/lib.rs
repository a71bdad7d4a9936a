//! Conversation controller for the chat client.
//!
//! Owns the transcript, the user/session identity and the request
//! lifecycle. Talks to the assistant backend only through
//! [`ports::ChatBackendPort`]; platform adapters live in `chat-platform`.

pub mod controller;
pub mod event_bus;
pub mod identity;
pub mod ids;
pub mod normalize;
pub mod ports;
pub mod transcript;
