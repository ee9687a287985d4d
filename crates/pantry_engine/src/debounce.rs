use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Single-shot, restartable timer: scheduling again cancels the pending action.
pub struct Debouncer {
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: None,
        }
    }

    /// Runs `action` after `delay` unless `schedule` or `cancel` is called first.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
