//! Tests for rendering domain errors as HTTP responses.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn trace_id() -> String {
    "00000000-0000-0000-0000-000000000000".to_owned()
}

/// Render `error` into its status, `trace-id` header and decoded body.
async fn render(error: &DomainError) -> (StatusCode, Option<String>, DomainError) {
    let response = error.error_response();
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("response body is readable");
    let body = serde_json::from_slice(&bytes).expect("body is a domain error");
    (status, header, body)
}

#[rstest]
#[case(DomainError::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(DomainError::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(DomainError::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn each_code_has_one_status(#[case] error: DomainError, #[case] status: StatusCode) {
    assert_eq!(error.status_code(), status);
}

#[rstest]
#[actix_web::test]
async fn internal_message_and_details_stay_on_the_server(trace_id: String) {
    let error = DomainError::internal("car repository error: disk on fire")
        .with_trace_id(trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let (status, header, body) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(trace_id.as_str()));
    assert_eq!(body.code(), ErrorCode::InternalError);
    assert_eq!(body.message(), "Internal server error");
    assert_eq!(body.trace_id(), Some(trace_id.as_str()));
    assert!(body.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn validation_failures_are_returned_verbatim(trace_id: String) {
    let error = DomainError::invalid_request("latitude 91 must be within [-90, 90]")
        .with_trace_id(trace_id.clone())
        .with_details(json!({"field": "location.lat"}));

    let (status, header, body) = render(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(trace_id.as_str()));
    assert_eq!(body, error);
}

#[actix_web::test]
async fn missing_trace_id_sends_no_header() {
    let (status, header, body) = render(&DomainError::not_found("car 9 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(header.is_none());
    assert_eq!(body.trace_id(), None);
}

#[test]
fn actix_errors_become_generic_internal_errors() {
    let converted = DomainError::from(actix_web::error::ErrorBadRequest("boom"));

    assert_eq!(converted.code(), ErrorCode::InternalError);
    assert_eq!(converted.message(), "Internal server error");
    assert_eq!(converted.details(), None);
}
