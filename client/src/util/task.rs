//! Cancellable browser tasks.
//!
//! Timers that update shared view state (the delayed loader message, counter
//! ticks) run as `ScheduledTask`s. The owner aborts them on any terminal
//! transition or unmount instead of letting them fire into stale state.

#[cfg(feature = "hydrate")]
use futures::future::{AbortHandle, Abortable};

/// Handle to a spawned local future. Aborts the future on `cancel` or drop.
#[cfg(feature = "hydrate")]
#[derive(Debug)]
pub struct ScheduledTask {
    abort: AbortHandle,
}

#[cfg(feature = "hydrate")]
impl ScheduledTask {
    /// Spawn `fut` on the browser event loop.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        leptos::task::spawn_local(async move {
            let _ = Abortable::new(fut, registration).await;
        });
        Self { abort }
    }

    /// Spawn `fut` after `delay_ms` milliseconds.
    pub fn after<F>(delay_ms: u32, fut: F) -> Self
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        Self::spawn(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            fut.await;
        })
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
