//! Port contracts between the chat core and its transport.
//!
//! The core consumes inbound `(sender, text)` pairs through
//! [`MessageHandler`] and produces outbound `(recipient, text)` pairs
//! through [`MessageSender`].

pub mod handler;
pub mod sender;

pub use handler::{CommandHandler, MessageHandler};
pub use sender::{MessageSender, SendError, SendResult};
