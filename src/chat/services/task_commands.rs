//! Command handlers that drive the task store and notify participants.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

use super::templates::{
    ListView, NOT_ASSIGNED_TO_YOU, TASK_NOT_FOUND, TemplateError, Templates, UNASSIGN_ACCEPTED,
    UNEXPECTED_ERROR,
};
use crate::chat::domain::Command;
use crate::chat::ports::{CommandHandler, MessageSender, SendError};
use crate::task::{
    domain::{ParseTaskIdError, TaskId, User},
    ports::{TaskRepository, TaskRepositoryError},
};

/// Failures of a single command handler.
#[derive(Debug, Error)]
pub enum TaskCommandError {
    /// The argument is not a valid task identifier.
    #[error(transparent)]
    InvalidTaskId(#[from] ParseTaskIdError),
    /// The task store rejected the operation.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// A reply could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// The reply to the caller could not be delivered.
    #[error(transparent)]
    Delivery(#[from] SendError),
}

impl TaskCommandError {
    /// Returns the reply for errors the user caused, or `None` for
    /// unexpected failures.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::InvalidTaskId(err) => Some(err.to_string()),
            Self::Repository(TaskRepositoryError::NotFound(_)) => Some(TASK_NOT_FOUND.to_owned()),
            Self::Repository(TaskRepositoryError::Forbidden { .. }) => {
                Some(NOT_ASSIGNED_TO_YOU.to_owned())
            }
            Self::Repository(_) | Self::Template(_) | Self::Delivery(_) => None,
        }
    }
}

/// Result type for command handlers.
pub type TaskCommandResult = Result<(), TaskCommandError>;

/// Handles task commands on behalf of chat users.
///
/// Each handler replies to the caller and notifies at most one other
/// participant. Notifications to third parties are best effort: a failed
/// delivery is logged and does not fail the command.
pub struct TaskCommandService<R, S>
where
    R: TaskRepository,
    S: MessageSender,
{
    repository: Arc<R>,
    sender: Arc<S>,
    templates: Templates,
}

impl<R, S> TaskCommandService<R, S>
where
    R: TaskRepository,
    S: MessageSender,
{
    /// Creates a service over `repository` that replies through `sender`.
    #[must_use]
    pub fn new(repository: Arc<R>, sender: Arc<S>) -> Self {
        Self {
            repository,
            sender,
            templates: Templates::new(),
        }
    }

    /// Runs the handler for `command`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError`] when the arguments are invalid, the store
    /// rejects the operation, or the reply to the caller cannot be rendered
    /// or delivered.
    pub async fn execute(
        &self,
        command: Command,
        from: &User,
        arguments: &str,
    ) -> TaskCommandResult {
        match command {
            Command::Tasks => self.list(from, ListView::All).await,
            Command::Owner => self.list(from, ListView::Owned).await,
            Command::My => self.list(from, ListView::Assigned).await,
            Command::New => self.create(from, arguments).await,
            Command::Assign => self.assign(from, arguments).await,
            Command::Unassign => self.unassign(from, arguments).await,
            Command::Resolve => self.resolve(from, arguments).await,
        }
    }

    async fn list(&self, from: &User, view: ListView) -> TaskCommandResult {
        let tasks = match view {
            ListView::All => self.repository.list_all()?,
            ListView::Owned => self.repository.list_by_owner(from.id())?,
            ListView::Assigned => self.repository.list_by_assignee(from.id())?,
        };
        let reply = self.templates.task_list(from, &tasks, view)?;
        self.reply(from, &reply).await
    }

    async fn create(&self, from: &User, content: &str) -> TaskCommandResult {
        let task = self.repository.create_task(content, from)?;
        let reply = self.templates.task_created(&task)?;
        self.reply(from, &reply).await
    }

    async fn assign(&self, from: &User, arguments: &str) -> TaskCommandResult {
        let task_id = TaskId::parse(arguments)?;
        let assignment = self.repository.assign_task(task_id, from)?;
        let task = assignment.task();

        let reply = self.templates.assigned_to_you(task)?;
        self.reply(from, &reply).await?;

        let notice = self.templates.assigned_to(task, from)?;
        match assignment.previous_assignee() {
            Some(previous) if previous.id() != from.id() => self.notify(previous, &notice).await,
            _ if task.owner().id() != from.id() => self.notify(task.owner(), &notice).await,
            _ => {}
        }
        Ok(())
    }

    async fn unassign(&self, from: &User, arguments: &str) -> TaskCommandResult {
        let task_id = TaskId::parse(arguments)?;
        let task = self.repository.unassign_task(task_id, from)?;

        self.reply(from, UNASSIGN_ACCEPTED).await?;

        let notice = self.templates.left_unassigned(&task)?;
        self.notify(task.owner(), &notice).await;
        Ok(())
    }

    async fn resolve(&self, from: &User, arguments: &str) -> TaskCommandResult {
        let task_id = TaskId::parse(arguments)?;
        let task = self.repository.resolve_task(task_id, from)?;

        let reply = self.templates.resolved(&task)?;
        self.reply(from, &reply).await?;

        if task.owner().id() != from.id() {
            // Resolution requires the caller to be the assignee, so the
            // snapshot's assignee is the caller.
            let resolver = task.assignee().unwrap_or(from);
            let notice = self.templates.resolved_by(&task, resolver)?;
            self.notify(task.owner(), &notice).await;
        }
        Ok(())
    }

    async fn reply(&self, to: &User, text: &str) -> TaskCommandResult {
        self.sender.send_message(to, text).await?;
        Ok(())
    }

    async fn notify(&self, to: &User, text: &str) {
        if let Err(err) = self.sender.send_message(to, text).await {
            warn!(user = %to.id(), error = %err, "failed to deliver notification");
        }
    }

    async fn report(&self, command: Command, from: &User, failure: &TaskCommandError) {
        let reply = failure.user_message().map_or_else(
            || {
                error!(
                    command = command.name(),
                    user = %from.id(),
                    error = %failure,
                    "command failed unexpectedly"
                );
                UNEXPECTED_ERROR.to_owned()
            },
            |reply| {
                debug!(
                    command = command.name(),
                    user = %from.id(),
                    reason = %reply,
                    "command rejected"
                );
                reply
            },
        );
        if let Err(err) = self.sender.send_message(from, &reply).await {
            warn!(user = %from.id(), error = %err, "failed to deliver error reply");
        }
    }
}

#[async_trait]
impl<R, S> CommandHandler for TaskCommandService<R, S>
where
    R: TaskRepository,
    S: MessageSender,
{
    async fn handle_command(&self, command: Command, from: &User, arguments: &str) {
        if let Err(failure) = self.execute(command, from, arguments).await {
            self.report(command, from, &failure).await;
        }
    }
}
