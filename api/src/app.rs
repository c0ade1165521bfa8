//! Application state and factory.
//!
//! All strategy registration happens here, once, before the server
//! starts taking traffic: the [`ErrorCodes`] registry is built from
//! the mappers each feature area contributes and is read-only
//! afterwards.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use gs_core::repositories::{GeekRepository, InMemoryGeekRepository};
use gs_core::services::GeekService;

use crate::errors::{ApiExceptionHandler, ErrorCodes};
use crate::i18n::CatalogMessageSource;
use crate::routes::geeks;
use crate::routes::geeks::error_codes::GeekAlreadyExistsMapper;

/// Shared per-process services.
pub struct AppState<R: GeekRepository> {
    pub geek_service: GeekService<R>,
    pub error_handler: ApiExceptionHandler,
}

/// Wire up the default application state: in-memory persistence, the
/// embedded message catalog, and every registered exception mapper.
///
/// An unreadable catalog is a startup-time fatal; nothing here can
/// fail once traffic is being served.
pub fn build_app_state() -> AppState<InMemoryGeekRepository> {
    let repository = Arc::new(InMemoryGeekRepository::new());
    let geek_service = GeekService::new(repository);

    // Mapper registration order is the resolver's iteration order.
    let error_codes = ErrorCodes::new(vec![Box::new(GeekAlreadyExistsMapper)]);
    let messages = Arc::new(CatalogMessageSource::load().expect("Failed to load error messages"));
    let error_handler = ApiExceptionHandler::new(error_codes, messages);

    AppState {
        geek_service,
        error_handler,
    }
}

/// Create and configure the application with all routes.
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: GeekRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .route("/geeks", web::post().to(geeks::create_geek::<R>))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "geekstore-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource does not exist",
    }))
}
