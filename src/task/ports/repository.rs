//! Repository port for task storage and lifecycle operations.

use crate::task::domain::{Assignment, TaskDomainError, TaskId, TaskSnapshot, User, UserId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task store contract.
///
/// Every operation is safe to call concurrently and completes without
/// suspending. Listings never include resolved tasks.
pub trait TaskRepository: Send + Sync {
    /// Returns all unresolved tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn list_all(&self) -> TaskRepositoryResult<Vec<TaskSnapshot>>;

    /// Returns unresolved tasks created by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn list_by_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<TaskSnapshot>>;

    /// Returns unresolved tasks assigned to `assignee`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn list_by_assignee(&self, assignee: UserId) -> TaskRepositoryResult<Vec<TaskSnapshot>>;

    /// Finds a task by identifier, including resolved tasks.
    ///
    /// Returns `None` when the identifier was never issued.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskSnapshot>>;

    /// Creates an open task owned by `creator`, registering the creator on
    /// first sight.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn create_task(&self, content: &str, creator: &User) -> TaskRepositoryResult<TaskSnapshot>;

    /// Makes `actor` the assignee of an unresolved task, replacing any
    /// previous assignee.
    ///
    /// The returned [`Assignment`] holds the task after the change and the
    /// displaced assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// or is resolved.
    fn assign_task(&self, id: TaskId, actor: &User) -> TaskRepositoryResult<Assignment>;

    /// Clears the assignee of a task claimed by `actor`.
    ///
    /// Returns the task as it was before the change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// or is resolved, and [`TaskRepositoryError::Forbidden`] when `actor` is
    /// not the current assignee.
    fn unassign_task(&self, id: TaskId, actor: &User) -> TaskRepositoryResult<TaskSnapshot>;

    /// Resolves a task claimed by `actor`.
    ///
    /// Returns the task as it was before the change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// or is resolved, and [`TaskRepositoryError::Forbidden`] when `actor` is
    /// not the current assignee.
    fn resolve_task(&self, id: TaskId, actor: &User) -> TaskRepositoryResult<TaskSnapshot>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task does not exist or has already been resolved.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The acting user may not perform the transition.
    #[error("user {user_id} may not change task {task_id}")]
    Forbidden {
        /// Task the transition was attempted on.
        task_id: TaskId,
        /// User that attempted the transition.
        user_id: UserId,
    },

    /// A task references a user record the store does not hold.
    #[error("user record missing: {0}")]
    UnknownUser(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<TaskDomainError> for TaskRepositoryError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::AlreadyResolved(task_id) => Self::NotFound(task_id),
            TaskDomainError::NotAssignee { task_id, user_id } => {
                Self::Forbidden { task_id, user_id }
            }
        }
    }
}
