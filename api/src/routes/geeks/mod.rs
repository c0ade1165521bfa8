//! Geeks endpoints.

pub mod error_codes;

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use gs_core::repositories::GeekRepository;

use crate::app::AppState;
use crate::dto::{to_validation_failure, CreateGeekRequest, GeekResponse};
use crate::errors::extract_language;

/// Handler for `POST /geeks`.
///
/// Registers a new geek. Failure paths all go through the exception
/// handler: rejected fields come back as one error entry per
/// violation, a duplicate name as the `geeks-1` code.
pub async fn create_geek<R>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    body: web::Json<CreateGeekRequest>,
) -> HttpResponse
where
    R: GeekRepository + 'static,
{
    let language = extract_language(&req);

    if let Err(errors) = body.validate() {
        let failure = to_validation_failure(&errors);
        return state
            .error_handler
            .handle_validation_failure(&failure, language);
    }

    // The required() rules above guarantee both fields are present.
    let first_name = body.first_name.as_deref().unwrap_or_default();
    let last_name = body.last_name.as_deref().unwrap_or_default();

    match state.geek_service.create_geek(first_name, last_name).await {
        Ok(geek) => HttpResponse::Created().json(GeekResponse::from(geek)),
        Err(error) => state.error_handler.handle_service_error(&error, language),
    }
}
