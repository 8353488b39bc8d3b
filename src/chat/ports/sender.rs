//! Outbound message port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::task::domain::User;

/// Result type for outbound sends.
pub type SendResult = Result<(), SendError>;

/// Port for delivering text to a chat user.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Sends `text` to the chat address of `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] when the transport fails to deliver the
    /// message. Sends are not retried.
    async fn send_message(&self, recipient: &User, text: &str) -> SendResult;
}

/// Errors returned by outbound transports.
#[derive(Debug, Clone, Error)]
pub enum SendError {
    /// The transport cannot accept messages.
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    /// The transport failed while delivering the message.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl SendError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
