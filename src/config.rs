//! Runtime configuration for the `taskbot` binary.
//!
//! Every flag can also be set through a `TASKBOT_*` environment variable.

use clap::Parser;

/// Command-line and environment configuration.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "taskbot")]
#[command(about = "Chat-driven task tracker reading commands from the console")]
#[command(version)]
pub struct BotConfig {
    /// Number of workers processing inbound messages
    #[arg(long, env = "TASKBOT_WORKERS", default_value_t = 2)]
    pub workers: usize,

    /// Log level used when `RUST_LOG` is not set
    #[arg(long, env = "TASKBOT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Capacity of the inbound message queue
    #[arg(long, env = "TASKBOT_QUEUE_SIZE", default_value_t = 64)]
    pub queue_size: usize,
}

impl BotConfig {
    /// Returns the worker count, never less than one.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.max(1)
    }

    /// Returns the inbound queue capacity, never less than one.
    #[must_use]
    pub fn queue_capacity(&self) -> usize {
        self.queue_size.max(1)
    }
}
