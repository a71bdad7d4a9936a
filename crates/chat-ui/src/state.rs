//! UI-level state that drives rendering.
//! A projection of controller events, updated each frame by draining the
//! EventBus. The transcript itself is read straight from the controller.

use chat_types::event::ChatEvent;

pub const STATUS_READY: &str = "Ready";
pub const STATUS_SENDING: &str = "Sending…";
pub const STATUS_FAILED: &str = "Request failed";
pub const STATUS_NEW_SESSION: &str = "New session";

pub struct UiState {
    /// Status line text
    pub status_text: String,
    /// A request has been accepted and has not finished yet
    pub awaiting_reply: bool,
    /// Set when a message lands; the transcript scrolls to it once
    pub scroll_to_bottom: bool,
    /// Requests that completed after a reset and were discarded
    pub dropped_responses: u32,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            status_text: STATUS_READY.to_string(),
            awaiting_reply: false,
            scroll_to_bottom: false,
            dropped_responses: 0,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::SubmitAccepted { .. } => {
                    self.awaiting_reply = true;
                    self.status_text = STATUS_SENDING.to_string();
                }
                ChatEvent::MessageAppended { .. } => {
                    self.scroll_to_bottom = true;
                }
                ChatEvent::RequestFinished { success, .. } => {
                    self.awaiting_reply = false;
                    self.status_text = if success { STATUS_READY } else { STATUS_FAILED }.to_string();
                }
                ChatEvent::StaleResponseDropped { request_id } => {
                    log::debug!("UI saw dropped response {}", request_id);
                    self.awaiting_reply = false;
                    self.dropped_responses += 1;
                    self.status_text = STATUS_READY.to_string();
                }
                ChatEvent::ConversationReset { .. } => {
                    self.status_text = STATUS_NEW_SESSION.to_string();
                }
            }
        }
    }

    /// Consume the scroll request for this frame
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
