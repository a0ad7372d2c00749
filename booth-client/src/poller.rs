//! Cancellable polling timer
//!
//! The refresh trigger for the live directory view lives behind this
//! abstraction so it can later be swapped for a push/subscribe mechanism
//! without changing the view-model contract.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Directory refresh cadence
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Handle to a running poll loop
///
/// Fires the tick callback immediately on spawn and then on a fixed
/// period. Every tick runs as its own task: a slow tick does not delay or
/// suppress the next one, matching the no-single-flight refresh contract.
///
/// Cancelling stops future ticks but does not abort in-flight work; each
/// tick receives the token so late completions can discard their results
/// instead of applying them to a deactivated view.
pub struct Poller {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl Poller {
    /// Spawn a poll loop with the given period
    pub fn spawn<F, Fut>(period: Duration, tick: F) -> Self
    where
        F: Fn(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        tokio::spawn(tick(token.clone()));
                    }
                }
            }
        });

        Self { cancel, task }
    }

    /// Stop future ticks. In-flight ticks observe the token and drop
    /// their results.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.task.abort();
    }
}
