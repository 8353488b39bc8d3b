//! Shared world state for task bot BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use eyre::eyre;
use rstest::fixture;
use taskbot::chat::{
    adapters::memory::{RecordingSender, SentMessage},
    domain::Command,
    services::{CommandRouter, TaskCommandService},
};
use taskbot::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ChatId, User, UserId},
};

/// Router type used by the BDD world.
pub type TestRouter =
    CommandRouter<TaskCommandService<InMemoryTaskRepository, RecordingSender>>;

/// Scenario world for task bot behaviour tests.
pub struct TaskBotWorld {
    pub router: TestRouter,
    pub sender: Arc<RecordingSender>,
    pub users: HashMap<String, User>,
    pub last_sent: Vec<SentMessage>,
}

impl TaskBotWorld {
    /// Creates a world with a fresh store and the users alice, bob and carol.
    #[must_use]
    pub fn new() -> Self {
        let sender = Arc::new(RecordingSender::new());
        let service = Arc::new(TaskCommandService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&sender),
        ));
        let router = CommandRouter::new(service)
            .with_sender(sender.clone())
            .with_usage(Command::usage_text());

        let users = [(1, 101, "alice"), (2, 102, "bob"), (3, 103, "carol")]
            .into_iter()
            .map(|(id, chat, name)| {
                (
                    name.to_owned(),
                    User::new(UserId::new(id), name, ChatId::new(chat)),
                )
            })
            .collect();

        Self {
            router,
            sender,
            users,
            last_sent: Vec::new(),
        }
    }

    /// Looks up a scenario user by display name.
    pub fn user(&self, name: &str) -> Result<User, eyre::Report> {
        self.users
            .get(name)
            .cloned()
            .ok_or_else(|| eyre!("unknown scenario user {name}"))
    }

    /// Returns the texts the last step sent to `name`.
    pub fn texts_for(&self, name: &str) -> Result<Vec<String>, eyre::Report> {
        let recipient = self.user(name)?;
        Ok(self
            .last_sent
            .iter()
            .filter(|message| message.recipient.id() == recipient.id())
            .map(|message| message.text.clone())
            .collect())
    }
}

impl Default for TaskBotWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBotWorld {
    TaskBotWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
