//! Shared test helpers for in-memory task bot integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskbot::chat::{
    adapters::memory::RecordingSender,
    domain::Command,
    services::{CommandRouter, TaskCommandService},
};
use taskbot::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ChatId, User, UserId},
};

/// Router type wired over the in-memory store and a recording sender.
pub type TestRouter =
    CommandRouter<TaskCommandService<InMemoryTaskRepository, RecordingSender>>;

/// Fully wired bot with handles on its store and outbound messages.
pub struct TestBot {
    pub repository: Arc<InMemoryTaskRepository>,
    pub sender: Arc<RecordingSender>,
    pub router: Arc<TestRouter>,
}

/// Provides a fresh bot for each test.
#[fixture]
pub fn bot() -> TestBot {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let sender = Arc::new(RecordingSender::new());
    let service = Arc::new(TaskCommandService::new(
        Arc::clone(&repository),
        Arc::clone(&sender),
    ));
    let router = CommandRouter::new(service)
        .with_sender(sender.clone())
        .with_usage(Command::usage_text());

    TestBot {
        repository,
        sender,
        router: Arc::new(router),
    }
}

/// Builds a chat user whose chat address matches its identifier.
///
/// # Panics
///
/// Panics if `id` does not fit a chat address.
#[must_use]
pub fn chat_user(id: u64, name: &str) -> User {
    let chat = i64::try_from(id).expect("test ids fit a chat address");
    User::new(UserId::new(id), name, ChatId::new(chat))
}

/// Provides the task creator used across scenarios.
#[fixture]
pub fn alice() -> User {
    chat_user(1, "alice")
}

/// Provides a second participant.
#[fixture]
pub fn bob() -> User {
    chat_user(2, "bob")
}
