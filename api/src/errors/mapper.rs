//! Strategy contract for translating domain failures to error codes.

use gs_core::errors::DomainError;

use super::code::ErrorCode;

/// Strategy interface converting one category of [`DomainError`] into
/// its [`ErrorCode`]. Implementations are stateless; each feature area
/// contributes one per failure category it wants to translate and
/// registers it with [`super::ErrorCodes`] at startup.
///
/// Callers must go through [`super::ErrorCodes`]: `to_error_code` may
/// only be called for a failure `can_handle` returned true for, and
/// its behavior is unspecified otherwise.
pub trait ExceptionToErrorCode: Send + Sync {
    /// Determines whether this implementation can handle the given
    /// failure. Must be a pure, side-effect-free predicate, typically
    /// a variant match on the error.
    fn can_handle(&self, error: &DomainError) -> bool;

    /// Converts the given failure to its [`ErrorCode`]. Only valid
    /// when [`Self::can_handle`] returned true for the same failure.
    fn to_error_code(&self, error: &DomainError) -> Box<dyn ErrorCode>;
}
