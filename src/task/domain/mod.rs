//! Domain model for shared chat tasks.
//!
//! The task domain models users, the task aggregate with its lifecycle
//! guards, and the detached snapshots returned to callers, while keeping
//! storage and transport concerns outside of the domain boundary.

mod error;
mod ids;
mod snapshot;
mod task;
mod user;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::{ChatId, TaskId, UserId};
pub use snapshot::{Assignment, TaskSnapshot};
pub use task::{Task, TaskState};
pub use user::User;
