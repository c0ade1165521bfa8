//! DTOs for the geeks endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use gs_core::domain::entities::Geek;
use gs_core::errors::{ValidationFailure, Violation};

/// Request body for `POST /geeks`.
///
/// Validation messages carry the catalog keys for the corresponding
/// field violations; the exception handler turns each key into an
/// error code and localizes it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGeekRequest {
    #[validate(required(message = "geeks-2"))]
    pub first_name: Option<String>,

    #[validate(required(message = "geeks-3"))]
    pub last_name: Option<String>,
}

/// Response body for a created geek.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeekResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl From<Geek> for GeekResponse {
    fn from(geek: Geek) -> Self {
        Self {
            id: geek.id,
            first_name: geek.first_name,
            last_name: geek.last_name,
        }
    }
}

/// Convert `validator` output into the ordered [`ValidationFailure`]
/// the exception handler consumes.
///
/// `validator` reports field errors in a hash map, so the fields are
/// sorted by name here to make the reported order deterministic; the
/// response preserves this order entry for entry.
pub fn to_validation_failure(errors: &ValidationErrors) -> ValidationFailure {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let violations = fields
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .map(|error| {
            Violation::new(
                error
                    .message
                    .as_deref()
                    .unwrap_or_else(|| error.code.as_ref()),
            )
        })
        .collect();

    ValidationFailure::new(violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = CreateGeekRequest {
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_report_catalog_keys_in_field_order() {
        let request = CreateGeekRequest {
            first_name: None,
            last_name: None,
        };

        let failure = to_validation_failure(&request.validate().unwrap_err());

        let keys: Vec<&str> = failure
            .violations()
            .iter()
            .map(|v| v.message_key())
            .collect();
        assert_eq!(keys, vec!["geeks-2", "geeks-3"]);
    }

    #[test]
    fn test_single_missing_field_reports_one_violation() {
        let request = CreateGeekRequest {
            first_name: Some("Grace".to_string()),
            last_name: None,
        };

        let failure = to_validation_failure(&request.validate().unwrap_err());

        assert_eq!(failure.violations().len(), 1);
        assert_eq!(failure.violations()[0].message_key(), "geeks-3");
    }
}
