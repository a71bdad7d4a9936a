//! egui panels for the chat client.
//!
//! Panels read and edit the conversation controller directly and report
//! user intents (submit, reset) back to the app, which owns the async side.

pub mod panels;
pub mod state;
pub mod theme;
