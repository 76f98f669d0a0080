//! Pricing service library modules.

pub mod domain;
pub mod inbound;
pub mod settings;

pub use domain::{PriceGenerator, PriceQuote, QuoteError};
