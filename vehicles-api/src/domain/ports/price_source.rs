//! Driven port for vehicle price lookups.

use std::fmt;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::CarId;
use crate::domain::lookup_retry::RetryableLookupError;

use super::define_port_error;

/// Price quoted for one vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    /// Monetary amount.
    pub amount: Decimal,
    /// ISO 4217 currency code, e.g. `USD`.
    pub currency: String,
}

impl Price {
    /// Build a price quote.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Price {
    /// Renders as `"<currency> <amount>"` with two decimal places.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use vehicles_api::domain::ports::Price;
    ///
    /// let price = Price::new(Decimal::new(1_234_567, 2), "USD");
    /// assert_eq!(price.to_string(), "USD 12345.67");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

define_port_error! {
    /// Errors surfaced while calling the pricing service.
    pub enum PriceSourceError {
        /// Network transport failed before receiving a response.
        Transport => "pricing transport failed",
        /// Pricing call exceeded its timeout.
        Timeout => "pricing timeout",
        /// Pricing service is overloaded or failing.
        Unavailable => "pricing service unavailable",
        /// No price exists for the vehicle.
        NotFound => "price not found",
        /// Pricing service rejected the request.
        Rejected => "pricing request rejected",
        /// Pricing response could not be decoded.
        Decode => "pricing response decode failed",
    }
}

impl RetryableLookupError for PriceSourceError {
    fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::Unavailable { .. }
        )
    }
}

/// Port for fetching a vehicle price.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current price for `vehicle_id`.
    async fn get_price(&self, vehicle_id: CarId) -> Result<Price, PriceSourceError>;
}

/// Fixture returning either one fixed price for every vehicle or a
/// `Rejected` error. A missing endpoint cannot recover, so the failure is not
/// retryable.
#[derive(Debug, Clone, Default)]
pub struct FixturePriceSource {
    price: Option<Price>,
}

impl FixturePriceSource {
    /// Fixture standing in for an unconfigured pricing endpoint.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { price: None }
    }

    /// Fixture that answers every lookup with `price`.
    #[must_use]
    pub const fn fixed(price: Price) -> Self {
        Self { price: Some(price) }
    }
}

#[async_trait]
impl PriceSource for FixturePriceSource {
    async fn get_price(&self, vehicle_id: CarId) -> Result<Price, PriceSourceError> {
        self.price.clone().ok_or_else(|| {
            PriceSourceError::rejected(format!("no pricing endpoint configured for car {vehicle_id}"))
        })
    }
}
