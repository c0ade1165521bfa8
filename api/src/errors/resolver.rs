//! Registry and dispatcher for [`ExceptionToErrorCode`] strategies.

use gs_core::errors::DomainError;

use super::code::{ErrorCode, UnknownErrorCode};
use super::mapper::ExceptionToErrorCode;

/// Resolves a [`DomainError`] to its [`ErrorCode`] by consulting the
/// registered [`ExceptionToErrorCode`] strategies.
///
/// Strategies are assembled once at startup and consulted in
/// registration order; the first strategy whose `can_handle` returns
/// true wins. If two strategies could both handle a failure, only the
/// first-registered one is ever asked. That tie-break keeps the
/// registry trivially extensible and is intentional, not an accident
/// of iteration order.
pub struct ErrorCodes {
    mappers: Vec<Box<dyn ExceptionToErrorCode>>,
}

impl ErrorCodes {
    /// Build the registry from the strategies contributed by every
    /// feature area. Registration happens once, before traffic is
    /// served; afterwards the registry is read-only and safe to share
    /// across concurrent requests.
    pub fn new(mappers: Vec<Box<dyn ExceptionToErrorCode>>) -> Self {
        Self { mappers }
    }

    /// Find the first strategy that can handle the given failure and
    /// delegate the translation to it.
    ///
    /// Never fails: a failure no strategy recognizes degrades to
    /// [`UnknownErrorCode`] rather than propagating an error.
    pub fn of(&self, error: &DomainError) -> Box<dyn ErrorCode> {
        self.mappers
            .iter()
            .find(|mapper| mapper.can_handle(error))
            .map(|mapper| mapper.to_error_code(error))
            .unwrap_or_else(|| Box::new(UnknownErrorCode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use gs_core::errors::GeekError;

    struct FixedCode {
        code: &'static str,
        status: StatusCode,
    }

    impl ErrorCode for FixedCode {
        fn code(&self) -> &str {
            self.code
        }

        fn http_status(&self) -> StatusCode {
            self.status
        }
    }

    /// Handles every internal error, answering with a fixed code.
    struct InternalErrorMapper {
        code: &'static str,
    }

    impl ExceptionToErrorCode for InternalErrorMapper {
        fn can_handle(&self, error: &DomainError) -> bool {
            matches!(error, DomainError::Internal { .. })
        }

        fn to_error_code(&self, _error: &DomainError) -> Box<dyn ErrorCode> {
            Box::new(FixedCode {
                code: self.code,
                status: StatusCode::BAD_GATEWAY,
            })
        }
    }

    fn internal_error() -> DomainError {
        DomainError::Internal {
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_matching_mapper_is_used() {
        let codes = ErrorCodes::new(vec![Box::new(InternalErrorMapper { code: "internal-1" })]);

        let resolved = codes.of(&internal_error());

        assert_eq!(resolved.code(), "internal-1");
        assert_eq!(resolved.http_status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_first_registered_mapper_wins() {
        let codes = ErrorCodes::new(vec![
            Box::new(InternalErrorMapper { code: "first" }),
            Box::new(InternalErrorMapper { code: "second" }),
        ]);

        assert_eq!(codes.of(&internal_error()).code(), "first");
    }

    #[test]
    fn test_unmatched_failure_degrades_to_unknown_code() {
        let codes = ErrorCodes::new(vec![Box::new(InternalErrorMapper { code: "internal-1" })]);
        let unmatched: DomainError = GeekError::AlreadyExists {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        }
        .into();

        let resolved = codes.of(&unmatched);

        assert_eq!(resolved.code(), "1");
        assert_eq!(resolved.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_empty_registry_always_answers_unknown() {
        let codes = ErrorCodes::new(vec![]);

        // Repeated calls stay on the unknown code.
        for _ in 0..3 {
            let resolved = codes.of(&internal_error());
            assert_eq!(resolved.code(), "1");
            assert_eq!(resolved.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
