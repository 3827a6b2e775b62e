//! Assertions for the backend's JSON error body.
//!
//! Kept independent of backend types; the shape is checked field by field.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBodyLike {
    success: bool,
    error: u16,
    message: String,
    code: String,
    detail: String,
    trace_id: String,
}

/// Assert that raw response parts carry the error contract:
/// `success: false`, `error` equal to the status, the expected `code`,
/// and a `trace_id` matching the `x-trace-id` header.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_message: Option<&str>,
) {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike = serde_json::from_slice(body_bytes).unwrap_or_else(|e| {
        panic!(
            "error body should be JSON ({e}): {}",
            String::from_utf8_lossy(body_bytes)
        )
    });

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");

    assert!(!body.success);
    assert_eq!(body.error, expected_status.as_u16());
    assert_eq!(body.code, expected_code, "detail was {:?}", body.detail);
    assert_eq!(
        body.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    if let Some(expected) = expected_message {
        assert_eq!(body.message, expected);
    }
}

/// [`assert_error_body_from_parts`] over an actix test response.
pub async fn assert_error_body(
    resp: actix_web::dev::ServiceResponse,
    expected_code: &str,
    expected_status: StatusCode,
    expected_message: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_message,
    );
}
