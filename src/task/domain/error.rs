//! Error types for task lifecycle guards and identifier parsing.

use super::{TaskId, UserId};
use thiserror::Error;

/// Errors returned when a lifecycle transition is not permitted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task has been resolved and accepts no further transitions.
    #[error("task {0} is already resolved")]
    AlreadyResolved(TaskId),

    /// The acting user is not the current assignee of the task.
    #[error("task {task_id} is not assigned to user {user_id}")]
    NotAssignee {
        /// Task the transition was attempted on.
        task_id: TaskId,
        /// User that attempted the transition.
        user_id: UserId,
    },
}

/// Error returned when command text does not name a valid task identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("task id must be int >= 1")]
pub struct ParseTaskIdError(pub String);
