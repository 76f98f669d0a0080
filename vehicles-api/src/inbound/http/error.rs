//! Rendering of [`DomainError`] as Actix responses.
//!
//! Each [`ErrorCode`] has one status code. The JSON body is the error itself,
//! except for internal failures, whose message and details never reach the
//! client. The trace id travels both in the body and in the `trace-id`
//! response header.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{DomainError, ErrorCode, TRACE_ID_HEADER};

/// Result type returned by the car handlers.
pub type ApiResult<T> = Result<T, DomainError>;

const INTERNAL_MESSAGE: &str = "Internal server error";

const fn http_status(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Payload a client may see for `error`.
fn client_payload(error: &DomainError) -> DomainError {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let mut generic = DomainError::internal(INTERNAL_MESSAGE);
    if let Some(id) = error.trace_id() {
        generic = generic.with_trace_id(id);
    }
    generic
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        http_status(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(trace_id = ?self.trace_id(), message = %self.message(), "internal error");
        }

        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_payload(self))
    }
}

impl From<actix_web::Error> for DomainError {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error converted to internal error");
        Self::internal(INTERNAL_MESSAGE)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
