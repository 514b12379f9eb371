//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has no body.
pub fn assert_empty_body(response: &TestResponse) {
    let body = response.text();
    assert!(body.is_empty(), "Expected empty body, got: {}", body);
}

/// Asserts that the response is a problem-details document with `status`.
pub fn assert_problem(response: &TestResponse, status: u16) {
    assert_eq!(response.status_code().as_u16(), status);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/problem+json"),
        "Expected problem+json content type, got: {}",
        content_type
    );

    let body: Value = response.json();
    assert_eq!(body["status"], status);
    assert!(body["detail"].is_string(), "Expected a detail message");
}

/// Asserts that the response carries a `Location` header equal to `expected`.
pub fn assert_location(response: &TestResponse, expected: &str) {
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("Expected Location header");
    assert_eq!(location, expected);
}
