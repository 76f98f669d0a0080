//! JSON error envelopes for pricing responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

use crate::domain::QuoteError;

/// Failures surfaced to pricing clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The path segment is not an unsigned integer.
    #[error("vehicle id must be an unsigned integer, got '{raw}'")]
    InvalidVehicleId {
        /// Path segment as received.
        raw: String,
    },
    /// The vehicle has no price.
    #[error(transparent)]
    Quote(#[from] QuoteError),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
}

impl ApiError {
    const fn code(&self) -> &'static str {
        match self {
            Self::InvalidVehicleId { .. } => "invalid_request",
            Self::Quote(QuoteError::UnknownVehicle { .. }) => "not_found",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidVehicleId { .. } => StatusCode::BAD_REQUEST,
            Self::Quote(QuoteError::UnknownVehicle { .. }) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        HttpResponse::build(self.status_code()).json(ErrorBody {
            code: self.code(),
            message: &message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bad_id(
        ApiError::InvalidVehicleId { raw: "abc".to_owned() },
        StatusCode::BAD_REQUEST,
        "invalid_request"
    )]
    #[case::unknown(
        ApiError::from(QuoteError::UnknownVehicle { vehicle_id: 20 }),
        StatusCode::NOT_FOUND,
        "not_found"
    )]
    fn errors_map_to_status_and_code(
        #[case] error: ApiError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        assert_eq!(error.status_code(), status);
        assert_eq!(error.code(), code);
    }
}
