//! Cancellable long-press timer.
//!
//! At most one timer is pending at a time: arming again aborts the previous
//! one. Cancelling an already fired or already cancelled timer is a no-op.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::error::ListError;

/// A single delayed action running on the current tokio runtime.
#[derive(Debug, Default)]
pub struct PressTimer {
    handle: Option<JoinHandle<()>>,
}

impl PressTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_fire` after `delay` unless cancelled first.
    ///
    /// Replaces any timer that is still pending.
    pub fn arm<F>(&mut self, delay: Duration, on_fire: F) -> Result<(), ListError>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| ListError::NoRuntime)?;
        self.cancel();

        // Deadline is taken now, not when the task is first polled.
        let deadline = Instant::now() + delay;
        self.handle = Some(runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_fire();
        }));
        Ok(())
    }

    /// Abort the pending timer.
    ///
    /// Returns `true` if a timer was still pending.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    /// Whether a timer is pending.
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for PressTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
