//! Slash-command chat front end for the task store.
//!
//! Inbound text flows through [`services::CommandRouter`], which parses it
//! into a [`domain::Command`] and hands it to
//! [`services::TaskCommandService`]. The service performs the store
//! operation and sends replies and notifications through a
//! [`ports::MessageSender`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use taskbot::chat::adapters::memory::RecordingSender;
//! use taskbot::chat::ports::MessageHandler;
//! use taskbot::chat::services::{CommandRouter, TaskCommandService};
//! use taskbot::task::adapters::memory::InMemoryTaskRepository;
//! use taskbot::task::domain::{ChatId, User, UserId};
//!
//! # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
//! let sender = Arc::new(RecordingSender::new());
//! let service = Arc::new(TaskCommandService::new(
//!     Arc::new(InMemoryTaskRepository::new()),
//!     Arc::clone(&sender),
//! ));
//! let router = CommandRouter::new(service).with_sender(sender.clone());
//!
//! let alice = User::new(UserId::new(1), "alice", ChatId::new(1));
//! router.handle_message(&alice, "/new buy milk").await;
//!
//! assert_eq!(
//!     sender.texts_for(alice.id()),
//!     vec![r#"Task "buy milk" created, id=1"#.to_owned()]
//! );
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
