//! Line-oriented console transport for running the bot locally.
//!
//! Each input line has the form `<user-id> <name>: <text>`, for example
//! `7 alice: /new buy milk`. Replies are written as
//! `[to @<name> #<chat-id>] <text>`.

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::chat::domain::InboundMessage;
use crate::chat::ports::{MessageSender, SendError, SendResult};
use crate::task::domain::{ChatId, User, UserId};

/// Errors for console lines that cannot be turned into messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsoleLineError {
    /// The line has no `:` separating the sender from the text.
    #[error("expected '<user-id> <name>: <text>'")]
    MissingSeparator,

    /// The sender identifier is not numeric.
    #[error("invalid user id '{0}'")]
    InvalidUserId(String),

    /// The sender has no name.
    #[error("missing user name")]
    MissingName,
}

/// Errors that stop the console reader.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading standard input failed.
    #[error("failed to read console input: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses one console line into an inbound message.
///
/// The user id doubles as the chat address.
///
/// # Errors
///
/// Returns [`ConsoleLineError`] when the line does not follow
/// `<user-id> <name>: <text>`.
pub fn parse_console_line(line: &str) -> Result<InboundMessage, ConsoleLineError> {
    let (header, text) = line
        .split_once(':')
        .ok_or(ConsoleLineError::MissingSeparator)?;
    let (raw_id, raw_name) = header
        .trim()
        .split_once(char::is_whitespace)
        .ok_or(ConsoleLineError::MissingName)?;
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(ConsoleLineError::MissingName);
    }
    let id = raw_id
        .parse::<u64>()
        .map_err(|_| ConsoleLineError::InvalidUserId(raw_id.to_owned()))?;
    let chat_id =
        i64::try_from(id).map_err(|_| ConsoleLineError::InvalidUserId(raw_id.to_owned()))?;

    let user = User::new(UserId::new(id), name, ChatId::new(chat_id));
    Ok(InboundMessage::new(user, text.trim()))
}

/// Reads console lines into `inbound` until input ends, the channel closes,
/// or `cancel` fires.
///
/// Blank lines are skipped and malformed lines are logged and dropped.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] when reading the input fails.
pub async fn read_console<R>(
    input: R,
    inbound: mpsc::Sender<InboundMessage>,
    cancel: CancellationToken,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        let next = tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            read = lines.next_line() => read?,
        };
        let Some(line) = next else {
            debug!("console input closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_console_line(&line) {
            Ok(message) => {
                if inbound.send(message).await.is_err() {
                    debug!("inbound channel closed");
                    break;
                }
            }
            Err(err) => warn!(error = %err, "ignoring console line"),
        }
    }
    Ok(())
}

/// Sender that writes replies to a console stream.
pub struct ConsoleSender<W> {
    writer: Mutex<W>,
}

impl ConsoleSender<Stdout> {
    /// Creates a sender writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> ConsoleSender<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a sender writing to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sender and returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W> MessageSender for ConsoleSender<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send_message(&self, recipient: &User, text: &str) -> SendResult {
        let line = format!(
            "[to @{} #{}] {}\n",
            recipient.display_name(),
            recipient.chat_id(),
            text.trim()
        );
        let mut writer = self.writer.lock().await;
        writer
            .write_all(line.as_bytes())
            .await
            .map_err(SendError::transport)?;
        writer.flush().await.map_err(SendError::transport)
    }
}
