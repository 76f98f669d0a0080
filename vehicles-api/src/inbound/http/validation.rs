//! Request decoding helpers shared by the car handlers.

use actix_web::{error::JsonPayloadError, web};
use serde_json::json;

use crate::domain::{CarId, CarValidationError, DomainError};

/// JSON extractor configuration turning decode failures into
/// `invalid_request` envelopes.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error, _req| json_payload_error(&error).into())
}

fn json_payload_error(error: &JsonPayloadError) -> DomainError {
    let code = match error {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "payload_too_large"
        }
        _ => "malformed_body",
    };
    DomainError::invalid_request(format!("invalid request body: {error}"))
        .with_details(json!({ "code": code }))
}

/// Map a car validation failure onto the client error envelope.
#[must_use]
pub(crate) fn car_validation_error(error: &CarValidationError) -> DomainError {
    DomainError::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": "invalid_car",
    }))
}

/// Parse a path segment into a [`CarId`].
pub(crate) fn parse_car_id(raw: &str) -> Result<CarId, DomainError> {
    raw.parse::<CarId>().map_err(|_| {
        DomainError::invalid_request(format!("car id must be a positive integer, got '{raw}'"))
            .with_details(json!({
                "field": "id",
                "value": raw,
                "code": "invalid_id",
            }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("12", Some(12))]
    #[case("0", None)]
    #[case("twelve", None)]
    fn parses_positive_path_ids(#[case] raw: &str, #[case] expected: Option<u64>) {
        match (parse_car_id(raw), expected) {
            (Ok(id), Some(value)) => assert_eq!(id.get(), value),
            (Err(error), None) => {
                assert_eq!(error.code(), ErrorCode::InvalidRequest);
                assert_eq!(
                    error.details().and_then(|details| details.get("value")),
                    Some(&json!(raw))
                );
            }
            (result, _) => panic!("unexpected parse result: {result:?}"),
        }
    }

    #[test]
    fn validation_errors_carry_field_path() {
        let error = car_validation_error(&CarValidationError::BlankField {
            field: "details.model",
        });
        assert_eq!(error.message(), "details.model must not be blank");
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "details.model", "code": "invalid_car" }))
        );
    }
}
