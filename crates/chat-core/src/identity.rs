//! User and session identity for one controller.

use std::rc::Rc;
use chat_types::session::SessionIdentity;
use crate::ids::IdGenerator;

pub struct IdentityManager {
    user_id: String,
    session_id: String,
    ids: Rc<IdGenerator>,
}

impl IdentityManager {
    /// Session id starts empty; call [`IdentityManager::start`] to create one.
    pub fn new(user_id: impl Into<String>, ids: Rc<IdGenerator>) -> Self {
        Self {
            user_id: user_id.into(),
            session_id: String::new(),
            ids,
        }
    }

    /// Generate the first session id. No-op when one already exists.
    pub fn start(&mut self) -> &str {
        if self.session_id.is_empty() {
            self.regenerate_session();
        }
        &self.session_id
    }

    /// Current value verbatim, possibly blank
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn set_user_id(&mut self, value: impl Into<String>) {
        self.user_id = value.into();
    }

    /// Direct access for text-edit widgets
    pub fn user_id_mut(&mut self) -> &mut String {
        &mut self.user_id
    }

    /// Empty until started
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn regenerate_session(&mut self) -> String {
        self.session_id = self.ids.next_id();
        self.session_id.clone()
    }

    /// The user id to send: the trimmed-empty field falls back to `default`.
    /// The stored value is left untouched.
    pub fn resolved_user_id(&self, default: &str) -> String {
        if self.user_id.trim().is_empty() {
            default.to_string()
        } else {
            self.user_id.clone()
        }
    }

    /// The session id to send, generating and adopting one if none exists.
    pub fn resolve_session_id(&mut self) -> String {
        if self.session_id.is_empty() {
            log::warn!("No session id at submit time, generating one");
            return self.regenerate_session();
        }
        self.session_id.clone()
    }

    /// The id generator shared with the transcript
    pub fn ids(&self) -> Rc<IdGenerator> {
        self.ids.clone()
    }

    pub fn snapshot(&self) -> SessionIdentity {
        SessionIdentity::new(self.user_id.clone(), self.session_id.clone())
    }
}
