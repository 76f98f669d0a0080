//! DTO for decoding pricing service responses.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::ports::Price;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PriceResponseDto {
    #[serde(default)]
    pub(super) vehicle_id: Option<u64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub(super) price: Decimal,
    pub(super) currency: String,
}

impl PriceResponseDto {
    pub(super) fn into_domain_price(self, requested: u64) -> Result<Price, String> {
        if let Some(vehicle_id) = self.vehicle_id.filter(|id| *id != requested) {
            return Err(format!(
                "price quoted for vehicle {vehicle_id}, expected {requested}"
            ));
        }
        let currency = self.currency.trim();
        if currency.is_empty() {
            return Err("price response has blank currency".to_owned());
        }
        Ok(Price::new(self.price, currency))
    }
}
