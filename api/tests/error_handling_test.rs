//! End-to-end tests for the error translation pipeline, exercised
//! through the real application over the demo geeks endpoint.

use actix_web::{test, web};
use serde_json::json;

use gs_api::app::{build_app_state, create_app};
use gs_shared::types::ErrorResponse;

#[actix_web::test]
async fn test_create_geek_succeeds() {
    let app = test::init_service(create_app(web::Data::new(build_app_state()))).await;

    let req = test::TestRequest::post()
        .uri("/geeks")
        .set_json(json!({"first_name": "Grace", "last_name": "Hopper"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
}

#[actix_web::test]
async fn test_duplicate_geek_reports_geeks_1() {
    let app = test::init_service(create_app(web::Data::new(build_app_state()))).await;

    let first = test::TestRequest::post()
        .uri("/geeks")
        .set_json(json!({"first_name": "Grace", "last_name": "Hopper"}))
        .to_request();
    test::call_service(&app, first).await;

    let second = test::TestRequest::post()
        .uri("/geeks")
        .set_json(json!({"first_name": "Grace", "last_name": "Hopper"}))
        .to_request();
    let resp = test::call_service(&app, second).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.status_code, 400);
    assert_eq!(body.reason_phrase, "Bad Request");
    assert_eq!(body.errors.len(), 1);
    assert_eq!(body.errors[0].code, "geeks-1");
    assert_eq!(
        body.errors[0].message,
        "There is another geek with the same name"
    );
}

#[actix_web::test]
async fn test_duplicate_geek_message_is_localized() {
    let app = test::init_service(create_app(web::Data::new(build_app_state()))).await;

    let first = test::TestRequest::post()
        .uri("/geeks")
        .set_json(json!({"first_name": "Ada", "last_name": "Lovelace"}))
        .to_request();
    test::call_service(&app, first).await;

    let second = test::TestRequest::post()
        .uri("/geeks")
        .insert_header(("Accept-Language", "zh-CN,zh;q=0.9,en;q=0.7"))
        .set_json(json!({"first_name": "Ada", "last_name": "Lovelace"}))
        .to_request();
    let resp = test::call_service(&app, second).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.errors[0].code, "geeks-1");
    assert_eq!(body.errors[0].message, "已存在同名的极客");
}

#[actix_web::test]
async fn test_missing_fields_fan_out_one_entry_per_violation() {
    let app = test::init_service(create_app(web::Data::new(build_app_state()))).await;

    let req = test::TestRequest::post()
        .uri("/geeks")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.status_code, 400);

    let codes: Vec<&str> = body.errors.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["geeks-2", "geeks-3"]);
    assert_eq!(body.errors[0].message, "The first name is required");
    assert_eq!(body.errors[1].message, "The last name is required");
}

#[actix_web::test]
async fn test_single_missing_field_reports_only_that_violation() {
    let app = test::init_service(create_app(web::Data::new(build_app_state()))).await;

    let req = test::TestRequest::post()
        .uri("/geeks")
        .set_json(json!({"first_name": "Grace"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.errors.len(), 1);
    assert_eq!(body.errors[0].code, "geeks-3");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(create_app(web::Data::new(build_app_state()))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
}
