//! Chat turn domain model.
//!
//! Constructors take the display timestamp explicitly; callers own the clock.

use serde::{Deserialize, Serialize};

use crate::proofs::NonEmptyString;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message exchanged in the simulated conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    role: Role,
    content: String,
    timestamp: String,
}

impl ChatTurn {
    /// A user turn. Content is validated non-empty by construction.
    #[must_use]
    pub fn user(content: NonEmptyString, timestamp: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into_inner(),
            timestamp: timestamp.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
