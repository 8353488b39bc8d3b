//! Task aggregate root and lifecycle state machine.

use super::{TaskDomainError, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle state, derived from the assignee and resolution flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Task has no assignee.
    Open,
    /// Task is claimed by a user.
    Assigned,
    /// Task is complete and hidden from listings.
    Resolved,
}

impl TaskState {
    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Assigned => "assigned",
            Self::Resolved => "resolved",
        }
    }

    /// Returns `true` when the state accepts no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

/// Task aggregate root.
///
/// Content and owner are fixed at creation. The assignee changes through
/// [`Task::assign`] and [`Task::unassign`], and [`Task::resolve`] moves the
/// task into its terminal state. Resolution is only reachable from the
/// assigned state, and the assignee is retained afterwards so a resolved
/// task always records who resolved it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    content: String,
    owner: UserId,
    assignee: Option<UserId>,
    resolved: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates an open task owned by `owner`.
    #[must_use]
    pub fn new(
        id: TaskId,
        content: impl Into<String>,
        owner: UserId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            content: content.into(),
            owner,
            assignee: None,
            resolved: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creator of the task.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the current assignee, if any.
    ///
    /// For resolved tasks this is the user who resolved it.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        if self.resolved {
            TaskState::Resolved
        } else if self.assignee.is_some() {
            TaskState::Assigned
        } else {
            TaskState::Open
        }
    }

    /// Returns `true` once the task has been resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Makes `user` the assignee, replacing any previous assignee.
    ///
    /// Returns the previous assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyResolved`] for resolved tasks.
    pub fn assign(
        &mut self,
        user: UserId,
        clock: &impl Clock,
    ) -> Result<Option<UserId>, TaskDomainError> {
        self.ensure_not_resolved()?;
        let previous = self.assignee.replace(user);
        self.touch(clock);
        Ok(previous)
    }

    /// Clears the assignee.
    ///
    /// Returns the user that was assigned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyResolved`] for resolved tasks and
    /// [`TaskDomainError::NotAssignee`] when `actor` is not the assignee.
    pub fn unassign(
        &mut self,
        actor: UserId,
        clock: &impl Clock,
    ) -> Result<UserId, TaskDomainError> {
        let assignee = self.ensure_assignee(actor)?;
        self.assignee = None;
        self.touch(clock);
        Ok(assignee)
    }

    /// Marks the task resolved by its current assignee.
    ///
    /// Returns the resolving user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyResolved`] for resolved tasks and
    /// [`TaskDomainError::NotAssignee`] when `actor` is not the assignee.
    pub fn resolve(
        &mut self,
        actor: UserId,
        clock: &impl Clock,
    ) -> Result<UserId, TaskDomainError> {
        let assignee = self.ensure_assignee(actor)?;
        self.resolved = true;
        self.touch(clock);
        Ok(assignee)
    }

    fn ensure_not_resolved(&self) -> Result<(), TaskDomainError> {
        if self.resolved {
            return Err(TaskDomainError::AlreadyResolved(self.id));
        }
        Ok(())
    }

    fn ensure_assignee(&self, actor: UserId) -> Result<UserId, TaskDomainError> {
        self.ensure_not_resolved()?;
        match self.assignee {
            Some(assignee) if assignee == actor => Ok(assignee),
            _ => Err(TaskDomainError::NotAssignee {
                task_id: self.id,
                user_id: actor,
            }),
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
