//! Inbound chat messages.

use crate::task::domain::User;
use uuid::Uuid;

/// A text message received from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    id: Uuid,
    from: User,
    text: String,
}

impl InboundMessage {
    /// Creates an inbound message with a fresh delivery identifier.
    #[must_use]
    pub fn new(from: User, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            text: text.into(),
        }
    }

    /// Returns the delivery identifier used to correlate log records.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the sender.
    #[must_use]
    pub const fn sender(&self) -> &User {
        &self.from
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
