//! Deterministic price generation.
//!
//! A quote is a pure function of the generator seed and the vehicle id: the
//! same pair always yields the same amount, so the pricing service holds no
//! state between requests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

/// Lowest vehicle id with a price.
pub const MIN_VEHICLE_ID: u64 = 1;
/// Highest vehicle id with a price.
pub const MAX_VEHICLE_ID: u64 = 19;

const CURRENCY: &str = "USD";
const MIN_PRICE_CENTS: i64 = 500_000;
const MAX_PRICE_CENTS: i64 = 2_500_000;

/// Price offered for one vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// Vehicle the quote applies to.
    pub vehicle_id: u64,
    /// Amount with two decimal places.
    pub price: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// Quote failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// The vehicle id lies outside the priced range.
    #[error("no price for vehicle {vehicle_id}")]
    UnknownVehicle {
        /// Requested vehicle id.
        vehicle_id: u64,
    },
}

/// Seeded generator of mock vehicle prices.
///
/// # Examples
/// ```
/// use pricing_service::PriceGenerator;
///
/// let generator = PriceGenerator::new(7);
/// let first = generator.quote(3).expect("priced vehicle");
/// assert_eq!(generator.quote(3), Ok(first));
/// assert!(generator.quote(20).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceGenerator {
    seed: u64,
}

impl PriceGenerator {
    /// Create a generator for `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Quote a price for `vehicle_id`.
    ///
    /// # Errors
    /// Returns [`QuoteError::UnknownVehicle`] when the id is outside
    /// [`MIN_VEHICLE_ID`]..=[`MAX_VEHICLE_ID`].
    pub fn quote(&self, vehicle_id: u64) -> Result<PriceQuote, QuoteError> {
        if !(MIN_VEHICLE_ID..=MAX_VEHICLE_ID).contains(&vehicle_id) {
            return Err(QuoteError::UnknownVehicle { vehicle_id });
        }
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ vehicle_id);
        let cents = rng.random_range(MIN_PRICE_CENTS..MAX_PRICE_CENTS);
        Ok(PriceQuote {
            vehicle_id,
            price: Decimal::new(cents, 2),
            currency: CURRENCY.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn generator() -> PriceGenerator {
        PriceGenerator::new(42)
    }

    #[rstest]
    fn quotes_are_stable_per_vehicle(generator: PriceGenerator) {
        for vehicle_id in MIN_VEHICLE_ID..=MAX_VEHICLE_ID {
            assert_eq!(generator.quote(vehicle_id), generator.quote(vehicle_id));
        }
    }

    #[rstest]
    fn quotes_stay_within_price_band(generator: PriceGenerator) {
        let floor = Decimal::new(MIN_PRICE_CENTS, 2);
        let ceiling = Decimal::new(MAX_PRICE_CENTS, 2);
        for vehicle_id in MIN_VEHICLE_ID..=MAX_VEHICLE_ID {
            let quote = generator.quote(vehicle_id).expect("priced vehicle");
            assert!(quote.price >= floor && quote.price < ceiling, "{quote:?}");
            assert_eq!(quote.price.scale(), 2);
            assert_eq!(quote.currency, "USD");
            assert_eq!(quote.vehicle_id, vehicle_id);
        }
    }

    #[rstest]
    fn vehicles_are_not_all_priced_alike(generator: PriceGenerator) {
        let first = generator.quote(1).expect("priced vehicle").price;
        assert!(
            (2..=MAX_VEHICLE_ID)
                .any(|id| generator.quote(id).map(|quote| quote.price) != Ok(first))
        );
    }

    #[rstest]
    #[case::zero(0)]
    #[case::above_range(20)]
    #[case::far_above(u64::MAX)]
    fn ids_outside_range_are_unknown(generator: PriceGenerator, #[case] vehicle_id: u64) {
        assert_eq!(
            generator.quote(vehicle_id),
            Err(QuoteError::UnknownVehicle { vehicle_id })
        );
    }
}
