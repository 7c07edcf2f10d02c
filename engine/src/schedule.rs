//! Schedulable background tasks with owned cancellation.
//!
//! Timers run as tokio tasks that only send a message back to their owner.
//! The owner applies state changes when it drains its channel, so all mutation
//! stays on the host's frame loop.

use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

/// Handle to a spawned timer task. Dropping it aborts the task.
#[derive(Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn abort(&self) {
        self.abort.abort();
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.abort.is_aborted()
    }

    /// A second handle to the same task, for observing it after the owner is gone.
    #[cfg(test)]
    pub(crate) fn observer(&self) -> AbortHandle {
        self.abort.clone()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

fn spawn_abortable<F>(task: F) -> TaskHandle
where
    F: Future<Output = ()> + Send + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    tokio::spawn(async move {
        let _ = Abortable::new(task, registration).await;
    });
    TaskHandle { abort }
}

/// Send `msg` once after `delay`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_after<T>(delay: Duration, tx: mpsc::UnboundedSender<T>, msg: T) -> TaskHandle
where
    T: Send + 'static,
{
    spawn_abortable(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(msg);
    })
}

/// Send a clone of `msg` every `period`, first one `period` after the call.
///
/// Stops when aborted or when the receiving side is gone.
pub fn spawn_every<T>(period: Duration, tx: mpsc::UnboundedSender<T>, msg: T) -> TaskHandle
where
    T: Clone + Send + 'static,
{
    spawn_abortable(async move {
        let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticks.tick().await;
            if tx.send(msg.clone()).is_err() {
                break;
            }
        }
    })
}
