//! Port contracts for the task store.
//!
//! The chat command services depend on [`TaskRepository`] rather than on a
//! concrete store.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
