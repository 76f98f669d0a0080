//! Pricing service outbound adapter.
//!
//! A thin HTTP implementation of the `PriceSource` port.

mod dto;
mod http_source;

pub use http_source::PriceHttpSource;
