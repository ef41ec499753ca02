//! Fire-and-forget tasks with a handle.
//!
//! `spawn_local` gives nothing back; [`submit_task`] wraps the future so the
//! caller can cancel it (e.g. on unmount) or await how it ended.

use futures::channel::oneshot;
use futures::future::{abortable, AbortHandle};
use std::future::Future;
use std::pin::Pin;

pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Completed,
    Cancelled,
}

#[derive(Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
    done: oneshot::Receiver<TaskOutcome>,
}

impl TaskHandle {
    /// Задача будет прервана на ближайшей точке ожидания
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }

    /// Handle for cancelling from places that cannot own the `TaskHandle`
    /// (cleanup closures).
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    pub async fn join(self) -> TaskOutcome {
        self.done.await.unwrap_or(TaskOutcome::Cancelled)
    }
}

/// Spawns on the browser event loop.
pub fn submit_task<F>(future: F) -> TaskHandle
where
    F: Future<Output = ()> + 'static,
{
    submit_task_with(future, wasm_bindgen_futures::spawn_local)
}

pub fn submit_task_with<F, S>(future: F, spawn: S) -> TaskHandle
where
    F: Future<Output = ()> + 'static,
    S: FnOnce(LocalTask),
{
    let (task, abort) = abortable(future);
    let (tx, done) = oneshot::channel();
    spawn(Box::pin(async move {
        let outcome = match task.await {
            Ok(()) => TaskOutcome::Completed,
            Err(_) => TaskOutcome::Cancelled,
        };
        let _ = tx.send(outcome);
    }));
    TaskHandle { abort, done }
}
