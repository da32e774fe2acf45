//! Explicit two-state handle for the expiry watcher task.

use tokio::task::JoinHandle;

/// Watcher task state. Either no task is running, or exactly one is,
/// together with the handle that cancels it.
#[derive(Debug, Default)]
pub(crate) enum WatcherHandle {
    /// No watcher task is running.
    #[default]
    Stopped,
    /// A watcher task is running.
    Running(JoinHandle<()>),
}

impl WatcherHandle {
    /// Cancel the running task, if any. Returns whether a task was
    /// actually cancelled. Safe to call repeatedly.
    pub(crate) fn stop(&mut self) -> bool {
        match std::mem::take(self) {
            Self::Stopped => false,
            Self::Running(handle) => {
                handle.abort();
                true
            }
        }
    }

    /// Replace the current task with a new one, cancelling any previous
    /// task first. Two concurrent watcher tasks can never exist.
    pub(crate) fn replace(&mut self, handle: JoinHandle<()>) {
        self.stop();
        *self = Self::Running(handle);
    }

    /// Whether a watcher task is currently running.
    pub(crate) fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}
