//! Specialized attachers: configuration presets over [`attach_input_listener`].
//!
//! Each preset only fixes options and wraps the callback; no state lives
//! here beyond what the attachment layer already keeps.

use crate::host::{Document, InputEvent};

use super::defaults;
use super::{Cleanup, ListenOptions, attach_input_listener};

/// Attaches a debounced live-search listener.
///
/// Forces trimming and duplicate suppression (re-searching the identical
/// query is never useful), and raises `min_chars` to
/// [`defaults::LIVE_SEARCH_MIN_CHARS`] when the caller left it at the
/// default 0. `search_fn` receives `(query, event)`.
#[must_use = "dropping the Cleanup makes the attachment permanent"]
pub fn attach_live_search<D, F>(
    doc: &D,
    selector: &str,
    search_fn: F,
    options: ListenOptions,
) -> Cleanup
where
    D: Document + ?Sized,
    F: Fn(String, InputEvent) + Send + Sync + 'static,
{
    let mut options = options.with_trim(true).with_prevent_duplicates(true);
    if options.min_chars == defaults::MIN_CHARS {
        options.min_chars = defaults::LIVE_SEARCH_MIN_CHARS;
    }
    attach_input_listener(doc, selector, search_fn, options)
}

/// Attaches a debounced validation listener.
///
/// Forces trimming, then wraps `predicate` so every accepted value records
/// its verdict on the originating element via
/// [`EventTarget::set_valid`](crate::host::EventTarget::set_valid) and
/// triggers [`report_validity`](crate::host::EventTarget::report_validity).
/// Hosts without a validity channel keep working; those calls are no-ops
/// for them.
#[must_use = "dropping the Cleanup makes the attachment permanent"]
pub fn attach_validation<D, F>(
    doc: &D,
    selector: &str,
    predicate: F,
    options: ListenOptions,
) -> Cleanup
where
    D: Document + ?Sized,
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let options = options.with_trim(true);
    attach_input_listener(
        doc,
        selector,
        move |value: String, event: InputEvent| {
            let valid = predicate(&value);
            event.target.set_valid(valid);
            event.target.report_validity();
        },
        options,
    )
}

/// Attaches a debounced autosave listener.
///
/// Forces trimming and duplicate suppression so unchanged content is not
/// saved twice. `save_fn` receives `(value, event)`.
#[must_use = "dropping the Cleanup makes the attachment permanent"]
pub fn attach_autosave<D, F>(doc: &D, selector: &str, save_fn: F, options: ListenOptions) -> Cleanup
where
    D: Document + ?Sized,
    F: Fn(String, InputEvent) + Send + Sync + 'static,
{
    let options = options.with_trim(true).with_prevent_duplicates(true);
    attach_input_listener(doc, selector, save_fn, options)
}
