//! In-memory host implementation.
//!
//! [`MemoryDocument`] and [`MemoryElement`] implement the [`Document`] and
//! [`EventTarget`] traits without any real document behind them. Tests use
//! them to drive the listener layer synchronously; embedders can use them
//! wherever a headless form model is enough.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::{Document, Element, EventTarget, Handler, InputEvent, ListenerId};

/// An in-memory input element.
///
/// Holds a tag name, an optional id, a class list, a mutable value, and a
/// handler table keyed by event type. Validity verdicts and
/// `report_validity` calls are recorded so tests can assert on them.
pub struct MemoryElement {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    value: Mutex<String>,
    listeners: Mutex<Vec<Registration>>,
    next_listener_id: AtomicU64,
    valid: AtomicBool,
    validity_set: AtomicBool,
    validity_reports: AtomicUsize,
}

struct Registration {
    event_type: String,
    id: ListenerId,
    handler: Handler,
}

impl MemoryElement {
    /// Creates an element with the given tag name and no id or classes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            value: Mutex::new(String::new()),
            listeners: Mutex::new(Vec::new()),
            next_listener_id: AtomicU64::new(0),
            valid: AtomicBool::new(true),
            validity_set: AtomicBool::new(false),
            validity_reports: AtomicUsize::new(0),
        })
    }

    /// Creates an element with a tag, id, and class list.
    #[must_use]
    pub fn with_attrs(
        tag: impl Into<String>,
        id: Option<&str>,
        classes: &[&str],
    ) -> Arc<Self> {
        Arc::new(Self {
            tag: tag.into(),
            id: id.map(str::to_owned),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            value: Mutex::new(String::new()),
            listeners: Mutex::new(Vec::new()),
            next_listener_id: AtomicU64::new(0),
            valid: AtomicBool::new(true),
            validity_set: AtomicBool::new(false),
            validity_reports: AtomicUsize::new(0),
        })
    }

    /// Sets the element's current value without dispatching anything.
    pub fn set_value(&self, value: impl Into<String>) {
        *self
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = value.into();
    }

    /// Dispatches an event of `event_type` to every matching handler.
    ///
    /// Handlers run synchronously, in registration order, each receiving a
    /// fresh [`InputEvent`] snapshot of the current value.
    pub fn dispatch(self: &Arc<Self>, event_type: &str) {
        let event = InputEvent {
            event_type: event_type.to_owned(),
            value: self.value(),
            target: Arc::clone(self) as Element,
        };
        // Snapshot the handlers so a handler that detaches listeners
        // mid-dispatch cannot deadlock on the table lock.
        let handlers: Vec<Handler> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.event_type == event_type)
            .map(|r| Arc::clone(&r.handler))
            .collect();
        for handler in handlers {
            handler(&event);
        }
    }

    /// Convenience for tests: set the value, then dispatch.
    pub fn input(self: &Arc<Self>, value: impl Into<String>, event_type: &str) {
        self.set_value(value);
        self.dispatch(event_type);
    }

    /// Number of live listener registrations for `event_type`.
    #[must_use]
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.event_type == event_type)
            .count()
    }

    /// Last validity verdict recorded via [`EventTarget::set_valid`].
    ///
    /// Returns `None` if no verdict has been recorded yet.
    #[must_use]
    pub fn validity(&self) -> Option<bool> {
        if self.validity_set.load(Ordering::SeqCst) {
            Some(self.valid.load(Ordering::SeqCst))
        } else {
            None
        }
    }

    /// Number of times [`EventTarget::report_validity`] was called.
    #[must_use]
    pub fn validity_reports(&self) -> usize {
        self.validity_reports.load(Ordering::SeqCst)
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.classes.iter().any(|c| c == class)
        } else {
            self.tag == selector
        }
    }
}

impl EventTarget for MemoryElement {
    fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn add_listener(&self, event_type: &str, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_listener_id.fetch_add(1, Ordering::SeqCst));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Registration {
                event_type: event_type.to_owned(),
                id,
                handler,
            });
        id
    }

    fn remove_listener(&self, event_type: &str, id: ListenerId) -> bool {
        let mut listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|r| !(r.event_type == event_type && r.id == id));
        listeners.len() < before
    }

    fn set_valid(&self, valid: bool) {
        self.valid.store(valid, Ordering::SeqCst);
        self.validity_set.store(true, Ordering::SeqCst);
    }

    fn report_validity(&self) {
        self.validity_reports.fetch_add(1, Ordering::SeqCst);
    }
}

/// An in-memory document: a flat registry of [`MemoryElement`]s.
///
/// [`Document::select`] supports the simple-selector subset the crate's own
/// consumers need: a bare tag name, `#id`, or `.class`.
#[derive(Default)]
pub struct MemoryDocument {
    elements: Mutex<Vec<Arc<MemoryElement>>>,
}

impl MemoryDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element to the document.
    pub fn insert(&self, element: Arc<MemoryElement>) {
        self.elements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(element);
    }

    /// Creates and inserts an element in one step, returning the handle.
    pub fn create(&self, tag: &str, id: Option<&str>, classes: &[&str]) -> Arc<MemoryElement> {
        let element = MemoryElement::with_attrs(tag, id, classes);
        self.insert(Arc::clone(&element));
        element
    }
}

impl Document for MemoryDocument {
    fn select(&self, selector: &str) -> Vec<Element> {
        self.elements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.matches(selector))
            .map(|e| Arc::clone(e) as Element)
            .collect()
    }
}
