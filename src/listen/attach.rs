//! Debounced listener attachment.

use std::sync::{Arc, Mutex, PoisonError};

use crate::debounce::{DebouncePolicy, Debouncer};
use crate::host::{Document, Element, Handler, InputEvent, ListenerId};

use super::ListenOptions;

/// Attaches a debounced input listener to every element matching `selector`.
///
/// One shared [`Debouncer`] serves all matched elements; its action runs the
/// value gate (trim, `min_chars`, duplicate suppression) and, when the value
/// is accepted, invokes `callback(value, event)`.
///
/// Elements are resolved once, at call time. A selector matching nothing
/// logs a warning and yields a no-op [`Cleanup`]; it never panics.
///
/// # Example
///
/// ```
/// use debounced_input::host::MemoryDocument;
/// use debounced_input::listen::{ListenOptions, attach_input_listener};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let doc = MemoryDocument::new();
/// let search = doc.create("input", Some("search"), &[]);
///
/// let cleanup = attach_input_listener(
///     &doc,
///     "#search",
///     |value, _event| println!("query: {value}"),
///     ListenOptions::default(),
/// );
///
/// search.input("rust", "input");
/// tokio::time::sleep(std::time::Duration::from_millis(600)).await;
/// cleanup.detach();
/// # }
/// ```
#[must_use = "dropping the Cleanup makes the attachment permanent"]
pub fn attach_input_listener<D, C>(
    doc: &D,
    selector: &str,
    callback: C,
    options: ListenOptions,
) -> Cleanup
where
    D: Document + ?Sized,
    C: Fn(String, InputEvent) + Send + Sync + 'static,
{
    let elements = doc.select(selector);
    if elements.is_empty() {
        tracing::warn!(selector, "no elements matched selector, listener not attached");
        return Cleanup::noop();
    }

    let policy = if options.immediate {
        DebouncePolicy::leading(options.delay())
    } else {
        DebouncePolicy::new(options.delay())
    };

    let gate = ValueGate::from_options(&options);
    let debouncer = Arc::new(Debouncer::new(policy, move |event: InputEvent| {
        if let Some(value) = gate.accept(&event.value) {
            callback(value, event);
        }
    }));

    let handler: Handler = {
        let debouncer = Arc::clone(&debouncer);
        Arc::new(move |event: &InputEvent| debouncer.call(event.clone()))
    };

    let attached: Vec<(Element, ListenerId)> = elements
        .into_iter()
        .map(|element| {
            let id = element.add_listener(&options.event_type, Arc::clone(&handler));
            (element, id)
        })
        .collect();

    tracing::debug!(
        selector,
        elements = attached.len(),
        event_type = %options.event_type,
        "attached debounced input listener"
    );

    Cleanup::new(options.event_type, attached, debouncer)
}

/// Value gate applied to each debounced event before the callback runs.
///
/// Rejections are silent (the callback simply is not invoked): below
/// `min_chars`, or a duplicate of the last accepted value when duplicate
/// suppression is on. The last-accepted slot is private to one attachment.
struct ValueGate {
    trim: bool,
    min_chars: usize,
    prevent_duplicates: bool,
    last_accepted: Mutex<Option<String>>,
}

impl ValueGate {
    fn from_options(options: &ListenOptions) -> Self {
        Self {
            trim: options.trim,
            min_chars: options.min_chars,
            prevent_duplicates: options.prevent_duplicates,
            last_accepted: Mutex::new(None),
        }
    }

    /// Runs the gate, returning the accepted (post-trim) value.
    fn accept(&self, raw: &str) -> Option<String> {
        let value = if self.trim { raw.trim() } else { raw };
        if value.chars().count() < self.min_chars {
            return None;
        }
        if self.prevent_duplicates {
            let mut last = self
                .last_accepted
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if last.as_deref() == Some(value) {
                return None;
            }
            *last = Some(value.to_owned());
        }
        Some(value.to_owned())
    }
}

/// Reverses an attachment: removes every registered listener and cancels
/// the shared debouncer's pending invocation.
///
/// [`detach`](Self::detach) is idempotent; calling it again (or dropping an
/// already-detached `Cleanup`) is a no-op. Dropping an undetached `Cleanup`
/// does NOT detach: hold on to it for as long as the listeners should live,
/// then call `detach` explicitly.
pub struct Cleanup {
    event_type: String,
    attached: Mutex<Option<Vec<(Element, ListenerId)>>>,
    debouncer: Option<Arc<Debouncer<InputEvent>>>,
}

impl Cleanup {
    fn new(
        event_type: String,
        attached: Vec<(Element, ListenerId)>,
        debouncer: Arc<Debouncer<InputEvent>>,
    ) -> Self {
        Self {
            event_type,
            attached: Mutex::new(Some(attached)),
            debouncer: Some(debouncer),
        }
    }

    /// A cleanup that was never attached to anything.
    ///
    /// Returned for selectors that matched no elements; `detach` on it does
    /// nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self {
            event_type: String::new(),
            attached: Mutex::new(None),
            debouncer: None,
        }
    }

    /// Removes every listener this attachment registered and cancels any
    /// pending debounced invocation.
    pub fn detach(&self) {
        let Some(attached) = self
            .attached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        else {
            return;
        };

        let mut removed = 0usize;
        for (element, id) in &attached {
            if element.remove_listener(&self.event_type, *id) {
                removed += 1;
            }
        }
        if let Some(debouncer) = &self.debouncer {
            debouncer.cancel();
        }
        tracing::debug!(
            event_type = %self.event_type,
            removed,
            "detached debounced input listener"
        );
    }

    /// Returns `true` once [`detach`](Self::detach) has run (no-op cleanups
    /// count as detached from birth).
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.attached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl std::fmt::Debug for Cleanup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cleanup")
            .field("event_type", &self.event_type)
            .field("detached", &self.is_detached())
            .finish_non_exhaustive()
    }
}
