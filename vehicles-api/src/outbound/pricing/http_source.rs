//! Reqwest-backed price source adapter.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP error mapping, and JSON decoding into a domain [`Price`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::PriceResponseDto;
use crate::domain::CarId;
use crate::domain::ports::{Price, PriceSource, PriceSourceError};
use crate::outbound::status_message;

/// Price source that calls `GET {base}/prices/{id}`.
pub struct PriceHttpSource {
    client: Client,
    base: Url,
}

impl PriceHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    fn price_url(&self, vehicle_id: CarId) -> Result<Url, PriceSourceError> {
        let id = vehicle_id.to_string();
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                PriceSourceError::rejected(format!("base URL {} cannot carry a path", self.base))
            })?
            .pop_if_empty()
            .extend(["prices", id.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl PriceSource for PriceHttpSource {
    async fn get_price(&self, vehicle_id: CarId) -> Result<Price, PriceSourceError> {
        let url = self.price_url(vehicle_id)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_price(body.as_ref(), vehicle_id)
    }
}

fn parse_price(body: &[u8], vehicle_id: CarId) -> Result<Price, PriceSourceError> {
    let decoded: PriceResponseDto = serde_json::from_slice(body).map_err(|error| {
        PriceSourceError::decode(format!("invalid pricing JSON payload: {error}"))
    })?;
    decoded
        .into_domain_price(vehicle_id.get())
        .map_err(PriceSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> PriceSourceError {
    if error.is_timeout() {
        PriceSourceError::timeout(error.to_string())
    } else {
        PriceSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PriceSourceError {
    let message = status_message(status, body);
    match status {
        StatusCode::NOT_FOUND => PriceSourceError::not_found(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PriceSourceError::timeout(message)
        }
        StatusCode::TOO_MANY_REQUESTS => PriceSourceError::unavailable(message),
        _ if status.is_client_error() => PriceSourceError::rejected(message),
        _ => PriceSourceError::unavailable(message),
    }
}
