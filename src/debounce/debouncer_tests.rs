//! Tests for `Debouncer` timing behavior.
//!
//! All tests run with a paused tokio clock so windows elapse virtually.

use super::{DebouncePolicy, Debouncer};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recording action: appends every invocation's value.
fn recording() -> (Arc<Mutex<Vec<String>>>, impl Fn(String) + Send + Sync) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |value: String| {
        sink.lock().unwrap().push(value);
    })
}

const WINDOW: Duration = Duration::from_millis(500);

/// Sleeps just past the debounce window so pending work fires.
async fn let_window_elapse() {
    tokio::time::sleep(WINDOW + Duration::from_millis(50)).await;
}

#[tokio::test(start_paused = true)]
async fn trailing_fires_once_with_last_value() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::new(WINDOW), action);

    debouncer.call("a".to_owned());
    tokio::time::sleep(Duration::from_millis(100)).await;
    debouncer.call("ab".to_owned());
    tokio::time::sleep(Duration::from_millis(100)).await;
    debouncer.call("abc".to_owned());

    let_window_elapse().await;

    assert_eq!(*log.lock().unwrap(), vec!["abc".to_owned()]);
}

#[tokio::test(start_paused = true)]
async fn trailing_does_not_fire_before_quiescence() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::new(WINDOW), action);

    // Keep calling faster than the window; nothing may fire in between.
    for i in 0..5 {
        debouncer.call(format!("v{i}"));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(log.lock().unwrap().is_empty(), "fired during burst");
    }

    let_window_elapse().await;
    assert_eq!(*log.lock().unwrap(), vec!["v4".to_owned()]);
}

#[tokio::test(start_paused = true)]
async fn trailing_fires_per_quiescent_burst() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::new(WINDOW), action);

    debouncer.call("first".to_owned());
    let_window_elapse().await;

    debouncer.call("second".to_owned());
    let_window_elapse().await;

    assert_eq!(
        *log.lock().unwrap(),
        vec!["first".to_owned(), "second".to_owned()]
    );
}

#[tokio::test(start_paused = true)]
async fn leading_fires_synchronously_on_first_call() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::leading(WINDOW), action);

    debouncer.call("now".to_owned());

    // No await needed: leading edge runs the action inline.
    assert_eq!(*log.lock().unwrap(), vec!["now".to_owned()]);
}

#[tokio::test(start_paused = true)]
async fn leading_suppresses_calls_within_window() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::leading(WINDOW), action);

    debouncer.call("a".to_owned());
    tokio::time::sleep(Duration::from_millis(100)).await;
    debouncer.call("b".to_owned());
    tokio::time::sleep(Duration::from_millis(100)).await;
    debouncer.call("c".to_owned());

    assert_eq!(*log.lock().unwrap(), vec!["a".to_owned()]);

    // Expiry must not re-invoke the action.
    let_window_elapse().await;
    assert_eq!(*log.lock().unwrap(), vec!["a".to_owned()]);
}

#[tokio::test(start_paused = true)]
async fn leading_fires_again_after_quiescence() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::leading(WINDOW), action);

    debouncer.call("a".to_owned());
    let_window_elapse().await;
    debouncer.call("b".to_owned());

    assert_eq!(*log.lock().unwrap(), vec!["a".to_owned(), "b".to_owned()]);
}

#[tokio::test(start_paused = true)]
async fn leading_suppressed_call_restarts_cooldown() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::leading(WINDOW), action);

    debouncer.call("a".to_owned());
    tokio::time::sleep(Duration::from_millis(300)).await;
    // Suppressed, but pushes the cooldown out to t=800.
    debouncer.call("b".to_owned());
    tokio::time::sleep(Duration::from_millis(300)).await;
    // t=600: still inside the restarted cooldown.
    debouncer.call("c".to_owned());

    assert_eq!(*log.lock().unwrap(), vec!["a".to_owned()]);
}

#[tokio::test(start_paused = true)]
async fn cancel_drops_pending_invocation() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::new(WINDOW), action);

    debouncer.call("doomed".to_owned());
    debouncer.cancel();

    let_window_elapse().await;
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancel_resets_leading_cooldown() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::leading(WINDOW), action);

    debouncer.call("a".to_owned());
    debouncer.cancel();
    // Cooldown gone: the very next call fires immediately.
    debouncer.call("b".to_owned());

    assert_eq!(*log.lock().unwrap(), vec!["a".to_owned(), "b".to_owned()]);
}

#[tokio::test(start_paused = true)]
async fn drop_cancels_pending_invocation() {
    let (log, action) = recording();
    let debouncer = Debouncer::new(DebouncePolicy::new(WINDOW), action);

    debouncer.call("doomed".to_owned());
    drop(debouncer);

    let_window_elapse().await;
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn policy_accessor_round_trips() {
    let policy = DebouncePolicy::leading(Duration::from_millis(42));
    let debouncer = Debouncer::new(policy, |(): ()| {});
    assert_eq!(debouncer.policy(), policy);
}
