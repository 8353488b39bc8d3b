//! Command router: text line in, dispatched command out.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::chat::domain::{Command, CommandError, CommandInvocation};
use crate::chat::ports::{CommandHandler, MessageHandler, MessageSender};
use crate::task::domain::User;

/// Parses inbound text and dispatches it to a [`CommandHandler`].
///
/// Lines that fail to parse or name an unknown command are answered with a
/// single usage message: the reason line, followed by the usage text when
/// one is configured. Without a sender the failure is dropped.
pub struct CommandRouter<H>
where
    H: CommandHandler,
{
    handler: Arc<H>,
    sender: Option<Arc<dyn MessageSender>>,
    usage: Option<String>,
}

impl<H> CommandRouter<H>
where
    H: CommandHandler,
{
    /// Creates a router with no sender and no usage text.
    #[must_use]
    pub const fn new(handler: Arc<H>) -> Self {
        Self {
            handler,
            sender: None,
            usage: None,
        }
    }

    /// Sets the sender used to report usage errors.
    #[must_use]
    pub fn with_sender(mut self, sender: Arc<dyn MessageSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Sets the usage text appended to every error reply.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Parses `text` into a command and its argument text.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the line is malformed or names an
    /// unknown command.
    pub fn route(text: &str) -> Result<(Command, String), CommandError> {
        let invocation = CommandInvocation::parse(text)?;
        let command = Command::try_from(invocation.command())?;
        Ok((command, invocation.arguments().to_owned()))
    }

    async fn report_usage(&self, to: &User, error: &CommandError) {
        let Some(sender) = &self.sender else {
            return;
        };

        let mut reply = error.to_string();
        if let Some(usage) = &self.usage {
            reply.push('\n');
            reply.push_str(usage);
        }

        if let Err(send_error) = sender.send_message(to, &reply).await {
            warn!(user = %to.id(), error = %send_error, "failed to deliver usage message");
        }
    }
}

#[async_trait]
impl<H> MessageHandler for CommandRouter<H>
where
    H: CommandHandler,
{
    async fn handle_message(&self, from: &User, text: &str) {
        match Self::route(text) {
            Ok((command, arguments)) => {
                debug!(user = %from.id(), command = command.name(), "dispatching command");
                self.handler.handle_command(command, from, &arguments).await;
            }
            Err(error) => {
                debug!(user = %from.id(), %error, "rejected command line");
                self.report_usage(from, &error).await;
            }
        }
    }
}
