//! Chat user identity.

use super::{ChatId, UserId};
use serde::{Deserialize, Serialize};

/// A chat participant as reported by the transport.
///
/// Users are registered by the task store the first time they create or
/// claim a task. The first registration wins: later references carrying a
/// different display name or chat address do not update the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    display_name: String,
    chat_id: ChatId,
}

impl User {
    /// Creates a user identity.
    #[must_use]
    pub fn new(id: UserId, display_name: impl Into<String>, chat_id: ChatId) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            chat_id,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the name shown in task listings and notifications.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the address replies are delivered to.
    #[must_use]
    pub const fn chat_id(&self) -> ChatId {
        self.chat_id
    }
}
