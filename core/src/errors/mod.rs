//! Domain-specific error types and error handling.
//!
//! Error *messages* are deliberately not part of these types: the
//! presentation layer resolves a localized message per error code, so
//! the [`std::fmt::Display`] output here is for logs only.

mod validation;

pub use validation::{ValidationFailure, Violation};

use thiserror::Error;

/// Errors raised by the geeks feature area.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeekError {
    #[error("a geek named {first_name} {last_name} already exists")]
    AlreadyExists {
        first_name: String,
        last_name: String,
    },
}

/// Core domain errors.
///
/// Each feature area contributes its own error enum and bridges it in
/// through a `#[from]` variant, so the web boundary can match on the
/// category without knowing every concrete failure.
#[derive(Error, Debug)]
pub enum DomainError {
    // Bridge to feature-area error types
    #[error(transparent)]
    Geek(#[from] GeekError),

    #[error("internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
