//! Generic debounce combinator.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Delays execution of a wrapped callback until a quiet period elapses.
///
/// Every [`call`](Self::call) cancels any pending scheduled run and
/// schedules a new one `delay` in the future, so only the most recent
/// call within any delay window ever executes. Not specific to
/// validation; any `Fn(I)` can be wrapped.
pub struct Debouncer<I>
where
    I: Send + 'static,
{
    /// Quiet period before the pending call runs.
    delay: Duration,
    /// The wrapped callback.
    callback: Arc<dyn Fn(I) + Send + Sync + 'static>,
    /// The pending scheduled run, if any.
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<I: Send + 'static> std::fmt::Debug for Debouncer<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer").field("delay", &self.delay).finish()
    }
}

impl<I: Send + 'static> Debouncer<I> {
    /// Wraps `callback` with a debounce of `delay`.
    pub fn new(delay: Duration, callback: impl Fn(I) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Schedules `input` to be passed to the callback after the quiet
    /// period, discarding any previously pending input.
    pub fn call(&self, input: I) {
        let mut pending = self.pending.lock().expect("debounce lock poisoned");
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(input);
        }));
    }

    /// Cancels the pending run, if any.
    pub fn cancel(&self) {
        if let Some(pending) = self
            .pending
            .lock()
            .expect("debounce lock poisoned")
            .take()
        {
            pending.abort();
        }
    }
}

impl<I: Send + 'static> Drop for Debouncer<I> {
    fn drop(&mut self) {
        self.cancel();
    }
}
