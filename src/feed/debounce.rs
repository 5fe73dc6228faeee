//! Quiescence-window settling for rapidly changing input values.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// A value that propagates only after its source has been quiet for a
/// configured window.
///
/// Every [`set`](Debounced::set) supersedes the previous pending value and
/// restarts the window; [`settled`](Debounced::settled) is the suspension
/// point that resolves once the window elapses. The initial value is emitted
/// with no delay. The pending timer lives inside the `settled` future, so
/// dropping the owner (or the future) releases it; a dropped `settled` call
/// leaves the pending value intact for the next call.
#[derive(Debug)]
pub struct Debounced<T> {
    current: T,
    pending: Option<(T, Instant)>,
    quiescence: Duration,
}

impl<T> Debounced<T> {
    pub fn new(initial: T, quiescence: Duration) -> Self {
        Self {
            current: initial,
            pending: None,
            quiescence,
        }
    }

    /// Replaces the pending value and restarts the quiescence window.
    pub fn set(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.quiescence));
    }

    /// Last settled value; pending updates are not visible here.
    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops any pending update without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Waits out the quiescence window and returns the settled value.
    ///
    /// Returns immediately when nothing is pending. The exclusive borrow
    /// guarantees no update can slip in while the window is running; callers
    /// interleave `set` and `settled` through `select!`-style loops.
    pub async fn settled(&mut self) -> &T {
        if let Some(deadline) = self.pending.as_ref().map(|(_, deadline)| *deadline) {
            sleep_until(deadline).await;
            if let Some((value, _)) = self.pending.take() {
                self.current = value;
            }
        }
        &self.current
    }
}
