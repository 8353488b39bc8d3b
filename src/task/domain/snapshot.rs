//! Value snapshots handed out by the task store.

use super::{Task, TaskId, TaskState, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only copy of a task with owner and assignee resolved to users.
///
/// Snapshots are detached from the store; changing one has no effect on
/// stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    id: TaskId,
    content: String,
    owner: User,
    assignee: Option<User>,
    state: TaskState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskSnapshot {
    /// Builds a snapshot of `task` with its resolved owner and assignee.
    #[must_use]
    pub fn new(task: &Task, owner: User, assignee: Option<User>) -> Self {
        Self {
            id: task.id(),
            content: task.content().to_owned(),
            owner,
            assignee,
            state: task.state(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
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

    /// Returns the user that created the task.
    #[must_use]
    pub const fn owner(&self) -> &User {
        &self.owner
    }

    /// Returns the assignee at the time the snapshot was taken.
    #[must_use]
    pub const fn assignee(&self) -> Option<&User> {
        self.assignee.as_ref()
    }

    /// Returns the lifecycle state at the time the snapshot was taken.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
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
}

/// Outcome of claiming a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    task: TaskSnapshot,
    previous_assignee: Option<User>,
}

impl Assignment {
    /// Creates an assignment outcome.
    #[must_use]
    pub const fn new(task: TaskSnapshot, previous_assignee: Option<User>) -> Self {
        Self {
            task,
            previous_assignee,
        }
    }

    /// Returns the task as it stands after the assignment.
    #[must_use]
    pub const fn task(&self) -> &TaskSnapshot {
        &self.task
    }

    /// Returns the user displaced by the assignment, if any.
    #[must_use]
    pub const fn previous_assignee(&self) -> Option<&User> {
        self.previous_assignee.as_ref()
    }
}
