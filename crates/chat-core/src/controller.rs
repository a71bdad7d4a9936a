//! Conversation controller — the request lifecycle.
//!
//! `Idle → Pending → {Succeeded, Failed} → Idle`
//!
//! A submission is split in two synchronous halves around the network call:
//! [`ConversationController::begin_submit`] validates input, appends the user
//! message and hands back the payload with a [`Ticket`];
//! [`ConversationController::complete`] applies the outcome. [`submit`] glues
//! them together over an `Rc<RefCell<_>>` without holding the borrow across
//! the await, so the UI can keep rendering (and resetting) meanwhile.

use std::cell::RefCell;
use std::rc::Rc;

use chat_types::{
    ChatError,
    config::ClientConfig,
    event::ChatEvent,
    message::{Message, Role},
    session::SessionIdentity,
    wire::{ChatQuery, ChatReply},
};
use crate::event_bus::EventBus;
use crate::identity::IdentityManager;
use crate::ids::IdGenerator;
use crate::normalize::normalize;
use crate::ports::ChatBackendPort;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    Pending { request_id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestState {
    pub phase: RequestPhase,
    pub last_error: Option<String>,
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, RequestPhase::Pending { .. })
    }
}

impl Default for RequestState {
    fn default() -> Self {
        Self {
            phase: RequestPhase::Idle,
            last_error: None,
        }
    }
}

/// Identifies one submission and the transcript generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub request_id: u64,
    pub epoch: u64,
}

/// An accepted submission waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub query: ChatQuery,
}

/// What [`ConversationController::complete`] did with a result
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Appended as an assistant or error message
    Applied(Message),
    /// The conversation was reset while the call was in flight
    Stale,
}

pub struct ConversationController {
    config: ClientConfig,
    identity: IdentityManager,
    transcript: Transcript,
    request: RequestState,
    input: String,
    last_outcome: Option<Outcome>,
    event_bus: EventBus,
    request_counter: u64,
}

impl ConversationController {
    /// Build a controller and start its first session.
    pub fn new(config: ClientConfig, event_bus: EventBus) -> Self {
        let ids = Rc::new(IdGenerator::new(config.id_strategy));
        Self::with_ids(config, event_bus, ids)
    }

    pub fn with_ids(config: ClientConfig, event_bus: EventBus, ids: Rc<IdGenerator>) -> Self {
        let mut identity = IdentityManager::new(config.default_user_id.clone(), ids);
        identity.start();
        Self::with_identity(config, event_bus, identity)
    }

    /// Build around an existing identity, taken as is. An identity that was
    /// never started gets its session id at the first submit.
    pub fn with_identity(config: ClientConfig, event_bus: EventBus, identity: IdentityManager) -> Self {
        log::info!("Conversation started, session {:?}", identity.session_id());
        let transcript = Transcript::new(identity.ids());

        Self {
            config,
            identity,
            transcript,
            request: RequestState::default(),
            input: String::new(),
            last_outcome: None,
            event_bus,
            request_counter: 0,
        }
    }

    // ─── Accessors ───────────────────────────────────────────

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.all()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn identity(&self) -> SessionIdentity {
        self.identity.snapshot()
    }

    pub fn user_id(&self) -> &str {
        self.identity.user_id()
    }

    pub fn set_user_id(&mut self, value: impl Into<String>) {
        self.identity.set_user_id(value);
    }

    pub fn user_id_mut(&mut self) -> &mut String {
        self.identity.user_id_mut()
    }

    pub fn session_id(&self) -> &str {
        self.identity.session_id()
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn phase(&self) -> RequestPhase {
        self.request.phase
    }

    pub fn is_pending(&self) -> bool {
        self.request.is_pending()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.request.last_error.as_deref()
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Whether a submit right now would be accepted
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.input.trim().is_empty()
    }

    // ─── Lifecycle ───────────────────────────────────────────

    /// Accept the current input as a submission.
    ///
    /// Returns `None` without touching any state when the input is blank or a
    /// request is already pending.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        let trimmed = self.input.trim().to_string();
        if trimmed.is_empty() {
            return None;
        }
        if self.is_pending() {
            log::debug!("Submit ignored, a request is already pending");
            return None;
        }

        self.request.last_error = None;
        self.append(Role::User, trimmed.clone());
        self.input.clear();

        self.request_counter += 1;
        let request_id = self.request_counter;
        self.request.phase = RequestPhase::Pending { request_id };

        let query = ChatQuery {
            query: trimmed,
            user_id: self.identity.resolved_user_id(&self.config.default_user_id),
            session_id: self.identity.resolve_session_id(),
        };
        let ticket = Ticket {
            request_id,
            epoch: self.transcript.epoch(),
        };

        log::info!(
            "Submitting request {} (session {}, {} chars)",
            request_id,
            query.session_id,
            query.query.len()
        );
        self.event_bus.emit(ChatEvent::SubmitAccepted {
            request_id,
            session_id: query.session_id.clone(),
        });

        Some(PendingRequest { ticket, query })
    }

    /// Submit `text` as if it had been typed. A rejected submit leaves the
    /// input buffer as it was.
    pub fn submit_text(&mut self, text: impl Into<String>) -> Option<PendingRequest> {
        let previous = std::mem::replace(&mut self.input, text.into());
        let pending = self.begin_submit();
        if pending.is_none() {
            self.input = previous;
        }
        pending
    }

    /// Apply the result of the call identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<ChatReply, ChatError>,
    ) -> Completion {
        if self.request.phase == (RequestPhase::Pending { request_id: ticket.request_id }) {
            self.request.phase = RequestPhase::Idle;
        }

        if ticket.epoch != self.transcript.epoch() {
            log::info!(
                "Dropping response to request {} issued before a reset",
                ticket.request_id
            );
            self.event_bus.emit(ChatEvent::StaleResponseDropped {
                request_id: ticket.request_id,
            });
            return Completion::Stale;
        }

        let (message, outcome) = match result {
            Ok(reply) => {
                let text = normalize(&reply.answer);
                (self.append(Role::Assistant, text), Outcome::Succeeded)
            }
            Err(e) => {
                let description = e.to_string();
                log::error!("Request {} failed: {}", ticket.request_id, description);
                self.request.last_error = Some(description.clone());
                (self.append(Role::Error, description), Outcome::Failed)
            }
        };

        self.last_outcome = Some(outcome);
        self.event_bus.emit(ChatEvent::RequestFinished {
            request_id: ticket.request_id,
            success: outcome == Outcome::Succeeded,
        });
        Completion::Applied(message)
    }

    /// Clear the transcript and start a new session.
    ///
    /// An in-flight call is not aborted and stays pending; its result is
    /// discarded when it arrives.
    pub fn reset(&mut self) {
        self.transcript.reset();
        self.request.last_error = None;
        self.last_outcome = None;
        let session_id = self.identity.regenerate_session();
        log::info!("Conversation reset, new session {}", session_id);
        self.event_bus.emit(ChatEvent::ConversationReset { session_id });
    }

    fn append(&mut self, role: Role, content: String) -> Message {
        let message = self.transcript.append(role, content);
        self.event_bus.emit(ChatEvent::MessageAppended {
            message: message.clone(),
        });
        message
    }
}

/// Run one full submission of the controller's current input.
///
/// Returns `None` when the submission was skipped (blank input or already
/// pending). Must be spawned via `wasm_bindgen_futures::spawn_local` in the
/// browser; it will not block the UI thread.
pub async fn submit(
    controller: &Rc<RefCell<ConversationController>>,
    backend: &dyn ChatBackendPort,
) -> Option<Completion> {
    let PendingRequest { ticket, query } = controller.borrow_mut().begin_submit()?;
    let result = backend.send_query(query).await;
    Some(controller.borrow_mut().complete(ticket, result))
}
