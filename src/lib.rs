//! Taskbot: a chat-driven task tracker.
//!
//! Users create, claim, release, and resolve tasks by sending slash
//! commands. The bot answers the sender and notifies the other participants
//! of a task when its assignment changes.
//!
//! # Architecture
//!
//! Taskbot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, console)
//!
//! # Modules
//!
//! - [`task`]: Task records, lifecycle rules, and the task store
//! - [`chat`]: Command parsing, routing, and the task command service
//! - [`worker`]: Pool of workers draining the inbound message queue
//! - [`config`]: Command-line and environment configuration

pub mod chat;
pub mod config;
pub mod task;
pub mod worker;
