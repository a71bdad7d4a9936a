//! Append-only message history.
//!
//! Each [`Transcript::reset`] bumps the epoch. Completions that captured an
//! older epoch belong to a discarded conversation and must not be applied.

use std::rc::Rc;
use chrono::{DateTime, Utc};
use chat_types::message::{Message, Role};
use crate::ids::IdGenerator;

pub struct Transcript {
    messages: Vec<Message>,
    epoch: u64,
    /// Survives resets so timestamps never step backwards
    last_timestamp: Option<DateTime<Utc>>,
    ids: Rc<IdGenerator>,
}

impl Transcript {
    pub fn new(ids: Rc<IdGenerator>) -> Self {
        Self {
            messages: Vec::new(),
            epoch: 0,
            last_timestamp: None,
            ids,
        }
    }

    /// Create a message with a fresh id and the current time and push it.
    pub fn append(&mut self, role: Role, content: impl Into<String>) -> Message {
        let now = Utc::now();
        let timestamp = match self.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_timestamp = Some(timestamp);

        let message = Message::new(self.ids.next_id(), role, content, timestamp);
        self.messages.push(message.clone());
        message
    }

    pub fn reset(&mut self) {
        self.messages.clear();
        self.epoch += 1;
    }

    /// Snapshot in append order
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
