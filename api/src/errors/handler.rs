//! Boundary orchestrator turning failures into HTTP error responses.

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse};

use gs_core::errors::{DomainError, ValidationFailure};
use gs_shared::types::{ApiError, ErrorResponse, InvalidErrorResponse, Language};

use crate::i18n::MessageSource;

use super::code::{ErrorCode, UnknownErrorCode};
use super::resolver::ErrorCodes;

/// Sentinel message used when no localized text exists for a code.
pub const NO_MESSAGE_AVAILABLE: &str = "No message available";

/// Extract the language preference from the `Accept-Language` header,
/// defaulting to English.
pub fn extract_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

/// Catches failures surfaced while serving a request and converts them
/// to [`ErrorResponse`] bodies with a suitable HTTP status.
///
/// The handler is a process-lifetime singleton: it holds the
/// [`ErrorCodes`] registry and the [`MessageSource`] collaborator,
/// both read-only after startup, and keeps no per-request state.
pub struct ApiExceptionHandler {
    error_codes: ErrorCodes,
    messages: Arc<dyn MessageSource>,
}

impl ApiExceptionHandler {
    pub fn new(error_codes: ErrorCodes, messages: Arc<dyn MessageSource>) -> Self {
        Self {
            error_codes,
            messages,
        }
    }

    /// Handle a domain-service failure.
    ///
    /// The failure is resolved to its [`ErrorCode`], which also
    /// determines the HTTP status of the response: different domain
    /// failures produce different statuses, not a fixed one.
    pub fn handle_service_error(&self, error: &DomainError, language: Language) -> HttpResponse {
        log::error!("Domain error: {}", error);

        let error_code = self.error_codes.of(error);
        let api_error = self.to_api_error(error_code.as_ref(), language);
        self.respond(error_code.http_status(), vec![api_error])
    }

    /// Handle a structured validation failure.
    ///
    /// Every violation becomes its own error entry: an ad-hoc code
    /// whose identifier is the violation's message key and whose
    /// status is fixed at 400, localized like any other code. Entries
    /// keep the order the violations were reported in.
    pub fn handle_validation_failure(
        &self,
        failure: &ValidationFailure,
        language: Language,
    ) -> HttpResponse {
        let api_errors = failure
            .violations()
            .iter()
            .map(|violation| ValidationErrorCode {
                code: violation.message_key().to_string(),
            })
            .map(|code| self.to_api_error(&code, language))
            .collect();

        self.respond(StatusCode::BAD_REQUEST, api_errors)
    }

    /// Catch-all for failures that never went through the domain
    /// layer. Logged and reported under the unknown error code.
    ///
    /// The demo routes only surface [`DomainError`]s, so nothing
    /// reaches this today; it is the entry point for middleware and
    /// future routes whose failures are not domain errors, so they
    /// still answer with a well-formed error body instead of leaking
    /// an unhandled error.
    pub fn handle_unexpected(&self, error: &anyhow::Error, language: Language) -> HttpResponse {
        log::error!("Unexpected error: {:?}", error);

        let code = UnknownErrorCode;
        let api_error = self.to_api_error(&code, language);
        self.respond(code.http_status(), vec![api_error])
    }

    /// Convert a resolved code into an [`ApiError`] with localized
    /// text. A localization miss is observability only: it is logged
    /// and masked with [`NO_MESSAGE_AVAILABLE`], never a failure path.
    fn to_api_error(&self, error_code: &dyn ErrorCode, language: Language) -> ApiError {
        let message = match self.messages.get_message(error_code.code(), language) {
            Some(message) => message,
            None => {
                log::error!(
                    "Couldn't find any message for {} code under {} locale",
                    error_code.code(),
                    language
                );
                NO_MESSAGE_AVAILABLE.to_string()
            }
        };

        ApiError::new(error_code.code(), message)
    }

    fn respond(&self, status: StatusCode, errors: Vec<ApiError>) -> HttpResponse {
        match Self::body(status, errors) {
            Ok(body) => HttpResponse::build(status).json(body),
            Err(error) => {
                // Only reachable when an ErrorCode implementation
                // violates its contract, e.g. a non-error status.
                log::error!("Failed to build error response body: {}", error);
                HttpResponse::InternalServerError().finish()
            }
        }
    }

    fn body(status: StatusCode, errors: Vec<ApiError>) -> Result<ErrorResponse, InvalidErrorResponse> {
        let reason_phrase = status.canonical_reason().unwrap_or("Unknown Status");
        ErrorResponse::of_errors(status.as_u16(), reason_phrase, errors)
    }
}

/// Ad-hoc code synthesized per validation violation. The identifier is
/// the only varying part; the status is always 400.
struct ValidationErrorCode {
    code: String,
}

impl ErrorCode for ValidationErrorCode {
    fn code(&self) -> &str {
        &self.code
    }

    fn http_status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}
