//! Stateless regex validators.
//!
//! This module provides:
//! - A compiled matcher with explicit errors ([`Pattern`], [`PatternError`])
//! - A fail-closed convenience wrapper ([`validate_pattern`])
//! - Fixed-pattern specializations ([`is_valid_email`], [`is_valid_phone`])
//!
//! Validators are independent of the debounce and listener layers; they are
//! plain predicates a host can feed into
//! [`attach_validation`](crate::listen::attach_validation) or call directly.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;


/// Non-whitespace, non-`@` runs separated by a single `@` and a `.` in the
/// domain part. Deliberately loose: this screens typos, it does not enforce
/// RFC 5322.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Optional leading `+`, then at least 7 characters drawn from digits,
/// whitespace, hyphen, parentheses, or period.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9\s\-().]{7,}$").expect("phone pattern is a valid regex")
});

/// Error type for pattern compilation.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern source was empty.
    #[error("Empty pattern")]
    Empty,

    /// The pattern source is not a valid regex.
    #[error("Invalid pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// A compiled validation pattern.
///
/// Use this when the same pattern is tested repeatedly;
/// [`validate_pattern`] recompiles its source on every call.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `source` into a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Empty`] for an empty source and
    /// [`PatternError::Invalid`] when the source is not a valid regex.
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        if source.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    /// Tests `value` against the pattern.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl From<Regex> for Pattern {
    /// Wraps an already-compiled regex.
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

/// Tests `value` against `pattern`, failing closed.
///
/// An empty or invalid pattern returns `false` rather than erroring; use
/// [`Pattern::compile`] when compilation failures should be surfaced.
#[must_use]
pub fn validate_pattern(pattern: &str, value: &str) -> bool {
    Pattern::compile(pattern).is_ok_and(|p| p.matches(value))
}

/// Returns `true` if `value` looks like an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Returns `true` if `value` looks like a phone number.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}
