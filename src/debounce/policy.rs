//! Debounce policy for coalescing call bursts.

use std::time::Duration;

/// Default debounce window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

/// Which edge of a call burst triggers the wrapped action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// Fire once after the burst goes quiet for the full window.
    #[default]
    Trailing,
    /// Fire on the first call of a burst; suppress the rest of the burst.
    Leading,
}

/// Policy for debouncing a stream of calls.
///
/// Debouncing merges calls that occur within a time window, so a rapid
/// burst (keystrokes, repeated change events) produces a single invocation
/// of the wrapped action instead of one per call.
///
/// # Edge Semantics
///
/// | Edge | Burst `a, b, c` within one window | Invocations |
/// |----------|-----------------------------------|-------------|
/// | Trailing | fires after quiescence            | `c` only |
/// | Leading  | fires on first call               | `a` only |
///
/// In both modes each call restarts the window; the action never runs more
/// than once per burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebouncePolicy {
    /// The debounce window duration.
    window: Duration,
    /// Which edge of a burst fires the action.
    edge: Edge,
}

impl DebouncePolicy {
    /// Creates a trailing-edge policy with the specified window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            edge: Edge::Trailing,
        }
    }

    /// Creates a leading-edge policy with the specified window.
    #[must_use]
    pub const fn leading(window: Duration) -> Self {
        Self {
            window,
            edge: Edge::Leading,
        }
    }

    /// Returns the debounce window duration.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Returns the edge this policy fires on.
    #[must_use]
    pub const fn edge(&self) -> Edge {
        self.edge
    }
}

impl Default for DebouncePolicy {
    /// Creates a default policy: 500 ms window, trailing edge.
    ///
    /// 500 ms matches typical typing cadence: long enough to coalesce a
    /// word, short enough that the UI still feels responsive.
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            edge: Edge::Trailing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_trailing_500ms() {
        let policy = DebouncePolicy::default();
        assert_eq!(policy.window(), Duration::from_millis(500));
        assert_eq!(policy.edge(), Edge::Trailing);
    }

    #[test]
    fn new_creates_trailing_with_specified_window() {
        let policy = DebouncePolicy::new(Duration::from_millis(100));
        assert_eq!(policy.window(), Duration::from_millis(100));
        assert_eq!(policy.edge(), Edge::Trailing);
    }

    #[test]
    fn leading_creates_leading_edge() {
        let policy = DebouncePolicy::leading(Duration::from_secs(1));
        assert_eq!(policy.window(), Duration::from_secs(1));
        assert_eq!(policy.edge(), Edge::Leading);
    }

    #[test]
    fn equality_based_on_window_and_edge() {
        let a = DebouncePolicy::new(Duration::from_secs(1));
        let b = DebouncePolicy::new(Duration::from_secs(1));
        let c = DebouncePolicy::leading(Duration::from_secs(1));
        let d = DebouncePolicy::new(Duration::from_secs(2));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn default_edge_is_trailing() {
        assert_eq!(Edge::default(), Edge::Trailing);
    }
}
