//! Transport adapters for the chat ports.
//!
//! # Available Adapters
//!
//! - [`console`]: stdin/stdout transport for local runs
//! - [`memory::RecordingSender`]: captures outbound messages for tests
//! - [`logging`]: decorators that log inbound and outbound traffic

pub mod console;
pub mod logging;
pub mod memory;
