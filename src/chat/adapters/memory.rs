//! In-memory sender that records outbound messages.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::chat::ports::{MessageSender, SendError, SendResult};
use crate::task::domain::{User, UserId};

/// An outbound message captured by [`RecordingSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// User the message was addressed to.
    pub recipient: User,
    /// Message text.
    pub text: String,
}

/// Thread-safe sender that keeps every message instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSender {
    sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl RecordingSender {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded message in send order.
    #[must_use]
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    /// Returns the texts sent to `recipient`, in send order.
    #[must_use]
    pub fn texts_for(&self, recipient: UserId) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|message| message.recipient.id() == recipient)
            .map(|message| message.text)
            .collect()
    }

    /// Removes and returns every recorded message.
    #[must_use]
    pub fn take(&self) -> Vec<SentMessage> {
        self.sent
            .lock()
            .map(|mut sent| std::mem::take(&mut *sent))
            .unwrap_or_default()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send_message(&self, recipient: &User, text: &str) -> SendResult {
        let mut sent = self
            .sent
            .lock()
            .map_err(|err| SendError::Unavailable(err.to_string()))?;
        sent.push(SentMessage {
            recipient: recipient.clone(),
            text: text.to_owned(),
        });
        Ok(())
    }
}
