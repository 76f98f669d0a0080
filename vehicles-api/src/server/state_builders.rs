//! Builders for HTTP state ports and the lookup adapters behind them.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use vehicles_api::domain::ports::{
    AddressSource, CarRepository, FixturePriceSource, PriceSource,
};
use vehicles_api::domain::{CarService, TokioSleeper};
use vehicles_api::inbound::http::state::HttpState;
use vehicles_api::outbound::maps::{CoordinateAddressSource, MapsHttpSource};
use vehicles_api::outbound::persistence::InMemoryCarRepository;
use vehicles_api::outbound::pricing::PriceHttpSource;

use super::ServerConfig;

/// Use the pricing service when configured, otherwise report no price.
fn build_price_source(config: &ServerConfig) -> std::io::Result<Arc<dyn PriceSource>> {
    match &config.pricing_url {
        Some(url) => {
            info!(url = %url, "using pricing service");
            let source = PriceHttpSource::new(url.clone(), config.lookup_timeout).map_err(|e| {
                std::io::Error::other(format!("pricing client construction failed: {e}"))
            })?;
            Ok(Arc::new(source))
        }
        None => {
            info!("pricing url not configured; cars will be listed without prices");
            Ok(Arc::new(FixturePriceSource::unconfigured()))
        }
    }
}

/// Use the maps service when configured, otherwise fabricate addresses from
/// coordinates.
fn build_address_source(config: &ServerConfig) -> std::io::Result<Arc<dyn AddressSource>> {
    match &config.maps_url {
        Some(url) => {
            info!(url = %url, "using maps service");
            let source = MapsHttpSource::new(url.clone(), config.lookup_timeout).map_err(|e| {
                std::io::Error::other(format!("maps client construction failed: {e}"))
            })?;
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(CoordinateAddressSource)),
    }
}

/// Wire the car service over the store and lookups selected by `config`.
///
/// # Errors
/// Returns [`std::io::Error`] when an HTTP lookup client cannot be built.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let cars: Arc<dyn CarRepository> =
        Arc::new(InMemoryCarRepository::new(Arc::new(DefaultClock)));
    let service = Arc::new(
        CarService::new(
            cars,
            build_price_source(config)?,
            build_address_source(config)?,
        )
        .with_retry(config.retry, Arc::new(TokioSleeper)),
    );
    Ok(web::Data::new(HttpState::new(service.clone(), service)))
}
