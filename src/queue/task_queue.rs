//! FIFO executor for asynchronous units of work.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use futures_util::FutureExt;

/// Outcome of a queued task.
pub type TaskResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

type BoxedTask = Pin<Box<dyn Future<Output = TaskResult> + Send>>;

struct QueueState {
    pending: VecDeque<BoxedTask>,
    /// Guards the drain loop: set before the first task starts, cleared
    /// only once the pending list is empty.
    processing: bool,
}

/// Sequential, at-most-one-in-flight executor of async tasks.
///
/// Tasks run in strict arrival order; each settles (success, error or
/// panic) before the next starts. A failing task is reported at `error`
/// level and does not halt the queue. There is no cancellation for a
/// task already in flight; [`TaskQueue::clear`] only drops tasks that
/// have not started yet.
#[derive(Clone)]
pub struct TaskQueue {
    state: Arc<Mutex<QueueState>>,
}

impl TaskQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(QueueState {
                pending: VecDeque::new(),
                processing: false,
            })),
        }
    }

    /// Append a task and start draining if the queue was idle.
    pub fn enqueue<F>(&self, task: F)
    where
        F: Future<Output = TaskResult> + Send + 'static,
    {
        let start_drain = {
            let mut state = self.state.lock().expect("task queue mutex poisoned");
            state.pending.push_back(Box::pin(task));
            if state.processing {
                false
            } else {
                state.processing = true;
                true
            }
        };

        if start_drain {
            let state = self.state.clone();
            tokio::spawn(Self::drain(state));
        }
    }

    /// Drop every task that has not started yet.
    pub fn clear(&self) {
        self.state
            .lock()
            .expect("task queue mutex poisoned")
            .pending
            .clear();
    }

    /// Number of queued-and-not-yet-started tasks.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .expect("task queue mutex poisoned")
            .pending
            .len()
    }

    /// Whether no tasks are waiting to start.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a task is currently in flight or about to start.
    pub fn is_processing(&self) -> bool {
        self.state
            .lock()
            .expect("task queue mutex poisoned")
            .processing
    }

    async fn drain(state: Arc<Mutex<QueueState>>) {
        loop {
            let task = {
                let mut state = state.lock().expect("task queue mutex poisoned");
                match state.pending.pop_front() {
                    Some(task) => task,
                    None => {
                        state.processing = false;
                        return;
                    }
                }
            };

            match std::panic::AssertUnwindSafe(task).catch_unwind().await {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    tracing::error!(%error, "queued task failed");
                }
                Err(_) => {
                    tracing::error!("queued task panicked");
                }
            }
        }
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}
