//! Inbound message and command handler ports.

use async_trait::async_trait;

use crate::chat::domain::Command;
use crate::task::domain::User;

/// Port invoked once per inbound text message.
///
/// Handlers deal with every failure themselves; nothing is returned to the
/// transport.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Handles `text` received from `from`.
    async fn handle_message(&self, from: &User, text: &str);
}

/// Port invoked by the router for each successfully parsed command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handles `command` issued by `from` with its raw argument text.
    async fn handle_command(&self, command: Command, from: &User, arguments: &str);
}
