//! Structured request-validation failures.

use thiserror::Error;

/// A single rejected field or object constraint.
///
/// The message key is an opaque catalog identifier (e.g. `geeks-2`);
/// the presentation layer resolves it to localized text and uses it as
/// the error code of the corresponding response entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    message_key: String,
}

impl Violation {
    pub fn new(message_key: impl Into<String>) -> Self {
        Self {
            message_key: message_key.into(),
        }
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }
}

/// Raised when request-body validation rejects one or more fields.
///
/// Violations keep the order they were reported in; the error response
/// built from this failure preserves that order entry for entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("request validation failed with {} violation(s)", violations.len())]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}
