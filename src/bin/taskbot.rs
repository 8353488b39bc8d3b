//! Runs the task bot against a line-oriented console transport.
//!
//! Usage:
//!
//! ```text
//! taskbot [--workers <n>] [--queue-size <n>] [--log-level <level>]
//! ```
//!
//! Each line on standard input is one chat message of the form
//! `<user-id> <name>: <text>`. Replies and notifications are written to
//! standard output as `[to @<name> #<chat-id>] <text>`; logs go to
//! standard error. The bot stops when input ends (after handling every
//! queued message) or on Ctrl-C or SIGTERM (after finishing the messages
//! already in progress).

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use taskbot::chat::adapters::console::{ConsoleError, ConsoleSender, read_console};
use taskbot::chat::adapters::logging::{LoggingHandler, LoggingSender};
use taskbot::chat::domain::Command;
use taskbot::chat::services::{CommandRouter, TaskCommandService};
use taskbot::config::BotConfig;
use taskbot::task::adapters::memory::InMemoryTaskRepository;
use taskbot::worker::{WorkerPool, WorkerPoolError};
use thiserror::Error;
use tokio::io::{BufReader, stdin};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Time allowed for blocking stdin reads to wind down at exit.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

/// Errors that stop the bot.
#[derive(Debug, Error)]
enum BotError {
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error("console reader failed: {0}")]
    Reader(#[source] JoinError),
    #[error(transparent)]
    Workers(#[from] WorkerPoolError),
}

fn main() -> Result<(), BotError> {
    let config = BotConfig::parse();
    init_tracing(&config.log_level);

    let runtime = build_runtime()?;
    let outcome = runtime.block_on(run(config));
    runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);
    outcome
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_runtime() -> Result<Runtime, BotError> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(BotError::RuntimeInit)
}

async fn run(config: BotConfig) -> Result<(), BotError> {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let sender = Arc::new(LoggingSender::new(ConsoleSender::stdout()));
    let service = Arc::new(TaskCommandService::new(repository, Arc::clone(&sender)));
    let router = CommandRouter::new(service)
        .with_sender(sender)
        .with_usage(Command::usage_text());
    let handler = Arc::new(LoggingHandler::new(router));

    let cancel = CancellationToken::new();
    let (inbound_tx, inbound_rx) = mpsc::channel(config.queue_capacity());
    let pool = WorkerPool::spawn(handler, inbound_rx, config.worker_count(), cancel.clone());
    let reader = tokio::spawn(read_console(
        BufReader::new(stdin()),
        inbound_tx,
        cancel.clone(),
    ));
    tokio::spawn(cancel_on_signal(shutdown_signal(), cancel));
    info!(
        workers = pool.worker_count(),
        queue = config.queue_capacity(),
        "taskbot ready"
    );

    let read_outcome = reader
        .await
        .map_err(BotError::Reader)
        .and_then(|result| result.map_err(BotError::from));
    pool.join().await?;
    read_outcome
}

/// Resolves with the name of the first shutdown signal delivered.
async fn shutdown_signal() -> std::io::Result<&'static str> {
    tokio::select! {
        interrupt = tokio::signal::ctrl_c() => interrupt.map(|()| "interrupt"),
        terminate = terminate_signal() => terminate.map(|()| "terminate"),
    }
}

#[cfg(unix)]
async fn terminate_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut stream = signal(SignalKind::terminate())?;
    stream.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate_signal() -> std::io::Result<()> {
    std::future::pending().await
}

async fn cancel_on_signal<S>(signal: S, cancel: CancellationToken)
where
    S: Future<Output = std::io::Result<&'static str>>,
{
    match signal.await {
        Ok(name) => {
            info!(signal = name, "shutdown signal received, shutting down");
            cancel.cancel();
        }
        Err(err) => warn!(error = %err, "failed to listen for shutdown signals"),
    }
}
