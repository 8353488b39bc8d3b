//! Application services for the chat subsystem.
//!
//! The router turns text into commands; the task command service turns
//! commands into store operations and outbound notifications.

mod router;
mod task_commands;
pub mod templates;

pub use router::CommandRouter;
pub use task_commands::{TaskCommandError, TaskCommandResult, TaskCommandService};
pub use templates::{ListView, TemplateError, Templates};
