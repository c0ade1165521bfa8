//! Extensible error translation for the REST boundary.
//!
//! The pieces fit together like this: a request handler surfaces a
//! [`gs_core::errors::DomainError`]; [`ErrorCodes`] walks its
//! registered [`ExceptionToErrorCode`] strategies and resolves the
//! failure to an [`ErrorCode`] (or the unknown-error fallback); the
//! [`ApiExceptionHandler`] localizes the code's message and builds the
//! wire-format [`gs_shared::types::ErrorResponse`] with the status the
//! code declares.

pub mod code;
pub mod handler;
pub mod mapper;
pub mod resolver;

pub use code::{ErrorCode, UnknownErrorCode, UNKNOWN_ERROR_CODE};
pub use handler::{extract_language, ApiExceptionHandler, NO_MESSAGE_AVAILABLE};
pub use mapper::ExceptionToErrorCode;
pub use resolver::ErrorCodes;
