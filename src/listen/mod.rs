//! Listener attachment layer.
//!
//! This module provides:
//! - Attachment options with documented defaults ([`ListenOptions`], [`defaults`])
//! - The core attacher ([`attach_input_listener`]) and its reversal ([`Cleanup`])
//! - Configuration presets ([`attach_live_search`], [`attach_validation`],
//!   [`attach_autosave`])

mod attach;
pub mod defaults;
mod options;
mod presets;


pub use attach::{Cleanup, attach_input_listener};
pub use options::ListenOptions;
pub use presets::{attach_autosave, attach_live_search, attach_validation};
