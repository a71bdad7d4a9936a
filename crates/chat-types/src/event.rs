use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Events emitted by the conversation controller.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A submission passed validation and a request is about to be issued
    SubmitAccepted { request_id: u64, session_id: String },

    /// A message was appended to the transcript
    MessageAppended { message: Message },

    /// The outstanding request completed and its outcome was applied
    RequestFinished { request_id: u64, success: bool },

    /// A request completed after a reset; its outcome was discarded
    StaleResponseDropped { request_id: u64 },

    /// Transcript cleared and a new session started
    ConversationReset { session_id: String },
}
