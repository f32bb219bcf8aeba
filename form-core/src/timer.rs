//! One-shot scheduled task used for the simulated submit latency.

use std::time::Duration;

use thiserror::Error;
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::trace;

/// The timer was cancelled before it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("timer cancelled before it fired")]
pub struct Cancelled;

/// A timer task that fires once after a fixed duration.
///
/// Must be created inside a tokio runtime. Dropping the handle cancels the
/// task.
#[derive(Debug)]
pub struct OneShot {
    duration: Duration,
    handle: JoinHandle<()>,
    done: oneshot::Receiver<()>,
    outcome: Option<Result<(), Cancelled>>,
}

impl OneShot {
    pub fn schedule(duration: Duration) -> Self {
        let (tx, done) = oneshot::channel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            trace!(?duration, "one-shot timer fired");
            let _ = tx.send(());
        });

        Self {
            duration,
            handle,
            done,
            outcome: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether [`OneShot::wait`] has already observed the timer firing.
    pub fn has_fired(&self) -> bool {
        self.outcome == Some(Ok(()))
    }

    /// Aborts the task. If it had not fired yet, `wait` returns [`Cancelled`].
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Resolves once the timer fires. Safe to call again afterwards and
    /// safe to use as a `tokio::select!` branch.
    pub async fn wait(&mut self) -> Result<(), Cancelled> {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        let outcome = (&mut self.done).await.map_err(|_| Cancelled);
        self.outcome = Some(outcome);
        outcome
    }
}

impl Drop for OneShot {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
