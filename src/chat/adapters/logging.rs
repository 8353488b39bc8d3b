//! Decorators that log chat traffic.

use async_trait::async_trait;
use tracing::debug;

use crate::chat::ports::{MessageHandler, MessageSender, SendResult};
use crate::task::domain::User;

/// Logs every outbound message before passing it on.
pub struct LoggingSender<S> {
    inner: S,
}

impl<S> LoggingSender<S> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S> MessageSender for LoggingSender<S>
where
    S: MessageSender,
{
    async fn send_message(&self, recipient: &User, text: &str) -> SendResult {
        debug!("=> [@{}] {}", recipient.display_name(), text.trim());
        self.inner.send_message(recipient, text).await
    }
}

/// Logs every inbound message before passing it on.
pub struct LoggingHandler<H> {
    inner: H,
}

impl<H> LoggingHandler<H> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<H> MessageHandler for LoggingHandler<H>
where
    H: MessageHandler,
{
    async fn handle_message(&self, from: &User, text: &str) {
        debug!("<= [@{}] {}", from.display_name(), text);
        self.inner.handle_message(from, text).await;
    }
}
