//! API error code contract.

use actix_web::http::StatusCode;

/// Identifier reserved for failures no mapper recognizes.
pub const UNKNOWN_ERROR_CODE: &str = "1";

/// Represents an API error code: a stable, machine-readable identifier
/// for one failure category together with the HTTP status it maps to.
///
/// Identifiers are part of the public API contract and must not change
/// between releases. Each feature area implements this trait for its
/// own codes; enums are a good fit (see
/// [`crate::routes::geeks::error_codes::GeeksApiErrorCode`]).
pub trait ErrorCode: Send + Sync {
    /// The stable error code, e.g. `geeks-1`
    fn code(&self) -> &str;

    /// The HTTP status a response reporting this code carries, e.g.
    /// 400 Bad Request for a validation error code
    fn http_status(&self) -> StatusCode;
}

/// The universal fallback code: used whenever [`super::ErrorCodes`]
/// cannot find a mapper for a failure. A shared unit value compared by
/// value, so logging and tests see a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownErrorCode;

impl ErrorCode for UnknownErrorCode {
    fn code(&self) -> &str {
        UNKNOWN_ERROR_CODE
    }

    fn http_status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_error_code_contract() {
        let code = UnknownErrorCode;
        assert_eq!(code.code(), "1");
        assert_eq!(code.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_error_code_compares_by_value() {
        assert_eq!(UnknownErrorCode, UnknownErrorCode);
    }
}
