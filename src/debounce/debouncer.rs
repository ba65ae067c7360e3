//! The debounce primitive.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;

use super::{DebouncePolicy, Edge};

type Action<T> = Box<dyn Fn(T) + Send + Sync>;

/// Wraps an action so that a burst of calls collapses into one invocation.
///
/// A `Debouncer` owns the action, a [`DebouncePolicy`], and at most one
/// pending tokio task. Every [`call`](Self::call) supersedes the previous
/// one: in trailing mode the previously scheduled invocation is cancelled
/// and rescheduled with the new value; in leading mode the cooldown window
/// is restarted.
///
/// Invocations are fire-and-forget: nothing is returned from the action to
/// the caller of `call`.
///
/// # Runtime
///
/// `call` spawns onto the ambient tokio runtime and must therefore run
/// inside one. The action itself executes on a runtime worker, so it must
/// be `Send + Sync + 'static`.
///
/// # Cancellation
///
/// [`cancel`](Self::cancel) aborts any pending invocation. Dropping the
/// `Debouncer` does the same, so a debouncer that goes away mid-window
/// never fires afterwards.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use debounced_input::debounce::{DebouncePolicy, Debouncer};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let debouncer = Debouncer::new(
///     DebouncePolicy::new(Duration::from_millis(50)),
///     |query: String| println!("search: {query}"),
/// );
///
/// debouncer.call("a".to_owned());
/// debouncer.call("ab".to_owned()); // supersedes "a"
/// tokio::time::sleep(Duration::from_millis(60)).await; // prints "search: ab"
/// # }
/// ```
pub struct Debouncer<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    action: Action<T>,
    policy: DebouncePolicy,
    /// At most one pending task at any time: the scheduled trailing
    /// invocation, or the leading-edge cooldown marker.
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer wrapping `action` under `policy`.
    pub fn new<F>(policy: DebouncePolicy, action: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                action: Box::new(action),
                policy,
                pending: Mutex::new(None),
            }),
        }
    }

    /// Feeds one call into the debouncer.
    ///
    /// Trailing edge: cancels any pending invocation and schedules the
    /// action to run with `value` after a full quiet window. Leading edge:
    /// runs the action synchronously with `value` if no cooldown is live,
    /// then (re)starts the cooldown; the action never runs at cooldown
    /// expiry.
    pub fn call(&self, value: T) {
        let mut pending = self
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match self.inner.policy.edge() {
            Edge::Trailing => {
                if let Some(prev) = pending.take() {
                    prev.abort();
                }
                let inner = Arc::clone(&self.inner);
                *pending = Some(tokio::spawn(async move {
                    tokio::time::sleep(inner.policy.window()).await;
                    (inner.action)(value);
                }));
            }
            Edge::Leading => {
                let quiescent = pending.as_ref().is_none_or(JoinHandle::is_finished);
                if let Some(prev) = pending.take() {
                    prev.abort();
                }
                let window = self.inner.policy.window();
                // Cooldown marker only; carries no invocation.
                *pending = Some(tokio::spawn(async move {
                    tokio::time::sleep(window).await;
                }));
                // Invoke outside the lock: the action may call back into
                // cancel() (e.g. a callback that detaches its listeners).
                drop(pending);
                if quiescent {
                    (self.inner.action)(value);
                }
            }
        }
    }

    /// Cancels any pending invocation or cooldown.
    ///
    /// After `cancel`, the next leading-edge call fires immediately and no
    /// trailing-edge invocation from before the cancel can run.
    pub fn cancel(&self) {
        if let Some(handle) = self
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }

    /// Returns the policy this debouncer runs under.
    #[must_use]
    pub fn policy(&self) -> DebouncePolicy {
        self.inner.policy
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("policy", &self.inner.policy)
            .finish_non_exhaustive()
    }
}
