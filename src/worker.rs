//! Bounded pool of workers that process inbound messages.
//!
//! Workers share one inbound channel. Each takes a message, runs it through
//! the handler to completion, then takes the next, so messages handled by
//! one worker keep their arrival order while different workers run in
//! parallel. Cancellation is observed between messages: in-flight work
//! always finishes.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, mpsc};
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug_span, info};

use crate::chat::domain::InboundMessage;
use crate::chat::ports::MessageHandler;

/// Errors returned while shutting the pool down.
#[derive(Debug, Error)]
pub enum WorkerPoolError {
    /// A worker task panicked or was aborted.
    #[error("worker {index} failed: {source}")]
    Join {
        /// Index of the failed worker.
        index: usize,
        /// Underlying join failure.
        #[source]
        source: JoinError,
    },
}

/// Handle to a running set of message workers.
pub struct WorkerPool {
    workers: Vec<JoinHandle<()>>,
    cancel: CancellationToken,
}

impl WorkerPool {
    /// Spawns `requested_workers` workers (at least one) on the current tokio
    /// runtime.
    ///
    /// Workers stop once `cancel` fires or `inbound` is closed and drained.
    #[must_use]
    pub fn spawn<H>(
        handler: Arc<H>,
        inbound: mpsc::Receiver<InboundMessage>,
        requested_workers: usize,
        cancel: CancellationToken,
    ) -> Self
    where
        H: MessageHandler + 'static,
    {
        let worker_count = requested_workers.max(1);
        let inbound = Arc::new(Mutex::new(inbound));
        info!(workers = worker_count, "starting worker pool");

        let workers = (0..worker_count)
            .map(|index| {
                tokio::spawn(run_worker(
                    index,
                    Arc::clone(&handler),
                    Arc::clone(&inbound),
                    cancel.clone(),
                ))
            })
            .collect();

        Self { workers, cancel }
    }

    /// Returns the number of workers.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Signals every worker to stop taking new messages.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Waits for every worker to exit.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerPoolError::Join`] for the first worker that panicked.
    /// The remaining workers are still awaited.
    pub async fn join(self) -> Result<(), WorkerPoolError> {
        let mut first_failure = None;
        for (index, worker) in self.workers.into_iter().enumerate() {
            let outcome = worker.await;
            if first_failure.is_none() {
                first_failure = outcome
                    .err()
                    .map(|source| WorkerPoolError::Join { index, source });
            }
        }
        info!("worker pool stopped");
        first_failure.map_or(Ok(()), Err)
    }
}

async fn run_worker<H>(
    index: usize,
    handler: Arc<H>,
    inbound: Arc<Mutex<mpsc::Receiver<InboundMessage>>>,
    cancel: CancellationToken,
) where
    H: MessageHandler,
{
    loop {
        let next = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            message = next_message(&inbound) => message,
        };
        let Some(message) = next else {
            break;
        };

        let span = debug_span!("inbound", worker = index, message_id = %message.id());
        handler
            .handle_message(message.sender(), message.text())
            .instrument(span)
            .await;
    }
    info!(worker = index, "worker stopped");
}

async fn next_message(
    inbound: &Mutex<mpsc::Receiver<InboundMessage>>,
) -> Option<InboundMessage> {
    inbound.lock().await.recv().await
}
