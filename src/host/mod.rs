//! Host document abstraction.
//!
//! This module provides the injected capabilities the listener layer needs
//! from its host environment:
//! - Element lookup ([`Document`])
//! - Event (de)registration and value access ([`EventTarget`])
//! - The event payload delivered to handlers ([`InputEvent`])
//!
//! Timer scheduling is deliberately absent here: the debounce primitive
//! schedules onto the ambient tokio runtime instead of going through the
//! host. A complete in-memory host lives in [`memory`] for tests and
//! embedded use.

pub mod memory;


use std::sync::Arc;

pub use memory::{MemoryDocument, MemoryElement};

/// A shared handle to a host element.
pub type Element = Arc<dyn EventTarget>;

/// An event handler registered on an [`EventTarget`].
pub type Handler = Arc<dyn Fn(&InputEvent) + Send + Sync>;

/// Opaque token identifying one listener registration.
///
/// Returned by [`EventTarget::add_listener`] and required by
/// [`EventTarget::remove_listener`]. Tokens are only meaningful on the
/// target that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Snapshot of an element at event dispatch time.
///
/// `value` is captured when the host dispatches the event, so handlers that
/// run later (after a debounce window) still see the value the user typed,
/// not whatever the element holds by then.
#[derive(Clone)]
pub struct InputEvent {
    /// The event type this event was dispatched under (e.g. `"input"`).
    pub event_type: String,
    /// The element value at dispatch time.
    pub value: String,
    /// The element the event originated from.
    pub target: Element,
}

impl std::fmt::Debug for InputEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputEvent")
            .field("event_type", &self.event_type)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Trait for host elements that can carry input listeners.
///
/// Implementations wrap whatever the host calls an input element and expose
/// the minimal surface the attachment layer needs: the current value, event
/// registration, and an optional validity channel.
///
/// # Thread Safety
///
/// Targets must be `Send + Sync`: debounced handlers fire from tokio tasks.
pub trait EventTarget: Send + Sync {
    /// Returns the element's current value.
    fn value(&self) -> String;

    /// Registers `handler` for events of `event_type`.
    ///
    /// The same handler may be registered more than once; each registration
    /// gets its own [`ListenerId`].
    fn add_listener(&self, event_type: &str, handler: Handler) -> ListenerId;

    /// Removes the registration identified by `id` under `event_type`.
    ///
    /// Returns `true` if a registration was removed, `false` if `id` was
    /// unknown (already removed, or issued by another target). Unknown ids
    /// are a no-op, which makes repeated cleanup safe.
    fn remove_listener(&self, event_type: &str, id: ListenerId) -> bool;

    /// Records a validity verdict for this element.
    ///
    /// Hosts without a native validity mechanism can keep the default no-op.
    fn set_valid(&self, _valid: bool) {}

    /// Triggers native validity reporting, when the host supports it.
    fn report_validity(&self) {}
}

/// Trait for host documents that can resolve selectors to elements.
///
/// `select` resolves against the document's state at call time; attachments
/// are not reactive to elements added or removed later.
pub trait Document: Send + Sync {
    /// Returns every element currently matching `selector`.
    ///
    /// An unmatched selector yields an empty vector, never an error.
    fn select(&self, selector: &str) -> Vec<Element>;
}
