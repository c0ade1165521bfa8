//! HTTP error response body types.
//!
//! The JSON shape of these types is a public compatibility contract:
//!
//! ```json
//! {
//!     "status_code": 404,
//!     "reason_phrase": "Not Found",
//!     "errors": [
//!         {"code": "geeks-1", "message": "some, hopefully localized, error message"},
//!         {"code": "geeks-2", "message": "yet another message"}
//!     ]
//! }
//! ```
//!
//! Field names must not change between releases; clients key off them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single application-level error: a stable error code plus a
/// possibly localized message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// The application-level error code, e.g. `geeks-1`
    pub code: String,

    /// Possibly localized error message. Always present; callers
    /// substitute a sentinel text rather than omitting it.
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Immutable HTTP error response body.
///
/// Instances can only be built through [`ErrorResponse::of`] and
/// [`ErrorResponse::of_errors`], which enforce the invariants at
/// construction time: an error-range status code, a non-blank reason
/// phrase and at least one [`ApiError`]. Once built, a response can no
/// longer fail downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The 4xx or 5xx status code, e.g. 404
    pub status_code: u16,

    /// The HTTP reason phrase corresponding to the status code, e.g. Not Found
    pub reason_phrase: String,

    /// Application-level error code and message combinations. Never empty.
    pub errors: Vec<ApiError>,
}

/// Rejected [`ErrorResponse`] constructions.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidErrorResponse {
    #[error("error status codes should be between 400 and 599, got {0}")]
    StatusOutOfRange(u16),

    #[error("HTTP reason phrase can't be blank")]
    BlankReasonPhrase,

    #[error("errors list can't be empty")]
    NoErrors,
}

impl ErrorResponse {
    /// Build an error response with a single [`ApiError`]. The common
    /// case for regular, non-validation failures.
    pub fn of(
        status_code: u16,
        reason_phrase: impl Into<String>,
        error: ApiError,
    ) -> Result<Self, InvalidErrorResponse> {
        Self::of_errors(status_code, reason_phrase, vec![error])
    }

    /// Build an error response with multiple [`ApiError`]s. The
    /// canonical use case is request validation, where several fields
    /// can be rejected at once.
    pub fn of_errors(
        status_code: u16,
        reason_phrase: impl Into<String>,
        errors: Vec<ApiError>,
    ) -> Result<Self, InvalidErrorResponse> {
        if !(400..=599).contains(&status_code) {
            return Err(InvalidErrorResponse::StatusOutOfRange(status_code));
        }

        let reason_phrase = reason_phrase.into();
        if reason_phrase.trim().is_empty() {
            return Err(InvalidErrorResponse::BlankReasonPhrase);
        }

        if errors.is_empty() {
            return Err(InvalidErrorResponse::NoErrors);
        }

        Ok(Self {
            status_code,
            reason_phrase,
            errors,
        })
    }
}
