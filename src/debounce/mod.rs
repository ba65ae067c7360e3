//! Debounce layer: policy and primitive.
//!
//! This module provides:
//! - The debounce configuration ([`DebouncePolicy`], [`Edge`])
//! - The debounce primitive itself ([`Debouncer`])

mod debouncer;
mod policy;

#[cfg(test)]
mod debouncer_tests;

pub use debouncer::Debouncer;
pub use policy::{DebouncePolicy, Edge};
