//! `GET /prices/{vehicleId}`.

use actix_web::{get, web};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::ApiError;
use crate::domain::{PriceGenerator, PriceQuote};

/// Wire representation of a quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBody {
    /// Vehicle the quote applies to.
    pub vehicle_id: u64,
    /// Amount, serialised as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl From<PriceQuote> for PriceBody {
    fn from(value: PriceQuote) -> Self {
        Self {
            vehicle_id: value.vehicle_id,
            price: value.price,
            currency: value.currency,
        }
    }
}

/// Quote the mock price for one vehicle.
#[get("/prices/{vehicle_id}")]
pub async fn get_price(
    generator: web::Data<PriceGenerator>,
    path: web::Path<String>,
) -> Result<web::Json<PriceBody>, ApiError> {
    let raw = path.into_inner();
    let vehicle_id = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ApiError::InvalidVehicleId { raw: raw.clone() })?;
    let quote = generator.quote(vehicle_id)?;
    debug!(vehicle_id, price = %quote.price, "quoted vehicle price");
    Ok(web::Json(quote.into()))
}
