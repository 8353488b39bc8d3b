//! In-memory adapter implementations.
//!
//! State lives for the lifetime of the process; nothing is persisted across
//! restarts.

mod task;

pub use task::InMemoryTaskRepository;
