//! Default values for listener options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default debounce delay in milliseconds.
pub const DELAY_MS: u64 = 500;

/// Default event type listened for.
pub const EVENT_TYPE: &str = "input";

/// Default minimum accepted value length.
pub const MIN_CHARS: usize = 0;

/// Minimum value length the live-search preset falls back to when the
/// caller leaves `min_chars` at its default.
pub const LIVE_SEARCH_MIN_CHARS: usize = 2;

/// Default debounce delay as Duration.
#[must_use]
pub const fn delay() -> Duration {
    Duration::from_millis(DELAY_MS)
}
