use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Reserved; no current flow emits it
    System,
    Error,
}

impl Role {
    pub fn label(&self) -> &str {
        match self {
            Role::User => "You",
            Role::Assistant => "Laptop Intelligence",
            Role::System | Role::Error => "System",
        }
    }

    pub fn avatar(&self) -> &str {
        match self {
            Role::User => "Y",
            Role::Assistant => "AI",
            Role::System | Role::Error => "!",
        }
    }
}

/// A single transcript entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        role: Role,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_error(&self) -> bool {
        self.role == Role::Error
    }
}
