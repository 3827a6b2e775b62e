//! Every failure carries the same JSON body and a matching `x-trace-id`.

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend::errors::ErrorCode;
use backend::AppError;
use backend_test_support::error_body::assert_error_body;

use crate::support::{build_test_state, create_test_app};

async fn failing_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::ValidationError, "Example failure"))
}

#[actix_web::test]
async fn custom_error_has_contract_shape() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/error", web::get().to(failing_handler));
        })
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;
    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-trace-id header");

    let body = test::read_body(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 400);
    assert_eq!(json["message"], "bad request");
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["detail"], "Example failure");
    assert_eq!(json["trace_id"], trace_header.as_str());
    Ok(())
}

#[actix_web::test]
async fn successful_responses_carry_trace_header() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/categories").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let trace = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(trace.len(), 36, "uuid expected, got {trace:?}");
    Ok(())
}

#[actix_web::test]
async fn malformed_json_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/quizzes")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"previous_questions\": [1,")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;

    let req = test::TestRequest::post()
        .uri("/venues/search")
        .insert_header(("content-type", "application/json"))
        .set_payload("   ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;
    Ok(())
}

#[actix_web::test]
async fn missing_store_is_service_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let state = backend::infra::state::build_state().build().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/categories").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "DB_UNAVAILABLE", StatusCode::SERVICE_UNAVAILABLE, None).await;
    Ok(())
}
