//! Mock pricing domain.

mod price_generator;

pub use price_generator::{
    MAX_VEHICLE_ID, MIN_VEHICLE_ID, PriceGenerator, PriceQuote, QuoteError,
};
