//! Error codes and exception mappers contributed by the geeks feature
//! area.
//!
//! New feature areas follow the same pattern: declare an enum of codes
//! next to the routes, implement [`ExceptionToErrorCode`] for each
//! failure category, and register the mappers in
//! [`crate::app::build_app_state`]. The error translation layer itself
//! never changes.

use actix_web::http::StatusCode;

use gs_core::errors::{DomainError, GeekError};

use crate::errors::{ErrorCode, ExceptionToErrorCode};

/// Stable error codes owned by the geeks feature area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeeksApiErrorCode {
    AlreadyExists,
}

impl ErrorCode for GeeksApiErrorCode {
    fn code(&self) -> &str {
        match self {
            GeeksApiErrorCode::AlreadyExists => "geeks-1",
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            GeeksApiErrorCode::AlreadyExists => StatusCode::BAD_REQUEST,
        }
    }
}

/// Translates [`GeekError::AlreadyExists`] to [`GeeksApiErrorCode::AlreadyExists`].
pub struct GeekAlreadyExistsMapper;

impl ExceptionToErrorCode for GeekAlreadyExistsMapper {
    fn can_handle(&self, error: &DomainError) -> bool {
        matches!(error, DomainError::Geek(GeekError::AlreadyExists { .. }))
    }

    fn to_error_code(&self, _error: &DomainError) -> Box<dyn ErrorCode> {
        Box::new(GeeksApiErrorCode::AlreadyExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_code() {
        let code = GeeksApiErrorCode::AlreadyExists;
        assert_eq!(code.code(), "geeks-1");
        assert_eq!(code.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_mapper_only_handles_already_exists() {
        let mapper = GeekAlreadyExistsMapper;

        let handled: DomainError = GeekError::AlreadyExists {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        }
        .into();
        let unhandled = DomainError::Internal {
            message: "boom".to_string(),
        };

        assert!(mapper.can_handle(&handled));
        assert!(!mapper.can_handle(&unhandled));
        assert_eq!(mapper.to_error_code(&handled).code(), "geeks-1");
    }
}
