//! Chat command domain model.

mod command;
mod error;
mod invocation;
mod message;

pub use command::Command;
pub use error::CommandError;
pub use invocation::CommandInvocation;
pub use message::InboundMessage;
