//! Debounced input listeners over a host-injected document.
//!
//! A small utility crate: a debounce primitive, helpers that attach
//! debounced listeners to input elements of a host [`Document`], preset
//! attachers (live search, validation, autosave), and trivial regex
//! validators.
//!
//! The host supplies element lookup and event registration through the
//! [`host`] traits; timer scheduling comes from the ambient tokio runtime.
//! An in-memory host ships in [`host::memory`] for tests and headless use.
//!
//! [`Document`]: host::Document

pub mod debounce;
pub mod host;
pub mod listen;
pub mod validate;

pub use debounce::{DebouncePolicy, Debouncer, Edge};
pub use host::{Document, Element, EventTarget, InputEvent};
pub use listen::{
    Cleanup, ListenOptions, attach_autosave, attach_input_listener, attach_live_search,
    attach_validation,
};
pub use validate::{is_valid_email, is_valid_phone, validate_pattern};
