//! Browser adapters for the chat client.

pub mod backend;
pub mod config;
