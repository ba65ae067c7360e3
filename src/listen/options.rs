//! Listener attachment options.
//!
//! Defines the configuration structure with serde, so option bags can come
//! straight out of a host's config file as well as from code.

use std::time::Duration;

use serde::Deserialize;

use super::defaults;

/// Options for [`attach_input_listener`](super::attach_input_listener).
///
/// Every field has a documented default, so `ListenOptions::default()` (or
/// an empty config table) is a valid starting point. Builder-style `with_*`
/// methods cover in-code construction.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `delay_ms` | 500 | Debounce window in milliseconds |
/// | `event_type` | `"input"` | Event the listener registers under |
/// | `min_chars` | 0 | Values shorter than this are skipped |
/// | `trim` | false | Trim whitespace before the gate runs |
/// | `prevent_duplicates` | false | Skip a value equal to the last accepted one |
/// | `immediate` | false | Leading-edge debounce instead of trailing |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ListenOptions {
    /// Debounce window in milliseconds.
    pub delay_ms: u64,

    /// Event type the listener registers under.
    pub event_type: String,

    /// Minimum post-trim length an accepted value must have.
    pub min_chars: usize,

    /// Trim leading/trailing whitespace before gating.
    pub trim: bool,

    /// Suppress values equal to the last accepted value of this attachment.
    pub prevent_duplicates: bool,

    /// Fire on the leading edge of a burst instead of the trailing edge.
    pub immediate: bool,
}

impl Default for ListenOptions {
    fn default() -> Self {
        Self {
            delay_ms: defaults::DELAY_MS,
            event_type: defaults::EVENT_TYPE.to_owned(),
            min_chars: defaults::MIN_CHARS,
            trim: false,
            prevent_duplicates: false,
            immediate: false,
        }
    }
}

impl ListenOptions {
    /// Creates options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the debounce window.
    ///
    /// Sub-millisecond precision is dropped; the window is stored in whole
    /// milliseconds.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the event type to listen for.
    #[must_use]
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Sets the minimum accepted value length.
    #[must_use]
    pub const fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Enables or disables whitespace trimming.
    #[must_use]
    pub const fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Enables or disables duplicate suppression.
    #[must_use]
    pub const fn with_prevent_duplicates(mut self, prevent: bool) -> Self {
        self.prevent_duplicates = prevent;
        self
    }

    /// Switches between leading-edge (`true`) and trailing-edge (`false`).
    #[must_use]
    pub const fn with_immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    /// Returns the debounce window as a [`Duration`].
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
