//! Reqwest-backed address source adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::AddressResponseDto;
use crate::domain::ports::{AddressSource, AddressSourceError};
use crate::domain::{Address, Coordinates};
use crate::outbound::status_message;

/// Address source that calls `GET {base}/maps?lat=..&lon=..`.
pub struct MapsHttpSource {
    client: Client,
    base: Url,
}

impl MapsHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    fn maps_url(&self, coordinates: &Coordinates) -> Result<Url, AddressSourceError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AddressSourceError::unavailable(format!(
                    "base URL {} cannot carry a path",
                    self.base
                ))
            })?
            .pop_if_empty()
            .push("maps");
        url.query_pairs_mut()
            .append_pair("lat", &coordinates.lat().to_string())
            .append_pair("lon", &coordinates.lon().to_string());
        Ok(url)
    }
}

#[async_trait]
impl AddressSource for MapsHttpSource {
    async fn get_address(&self, coordinates: &Coordinates) -> Result<Address, AddressSourceError> {
        let url = self.maps_url(coordinates)?;
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

        let decoded: AddressResponseDto = serde_json::from_slice(body.as_ref()).map_err(|error| {
            AddressSourceError::decode(format!("invalid maps JSON payload: {error}"))
        })?;
        Ok(decoded.into())
    }
}

fn map_transport_error(error: reqwest::Error) -> AddressSourceError {
    if error.is_timeout() {
        AddressSourceError::timeout(error.to_string())
    } else {
        AddressSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AddressSourceError {
    let message = status_message(status, body);
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AddressSourceError::timeout(message)
        }
        _ => AddressSourceError::unavailable(message),
    }
}
