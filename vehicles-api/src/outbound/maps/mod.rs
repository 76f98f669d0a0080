//! Address lookup adapters.
//!
//! [`MapsHttpSource`] calls a maps service over HTTP. [`CoordinateAddressSource`]
//! fabricates a stable address from the coordinates for environments without
//! one.

mod coordinate;
mod dto;
mod http_source;

pub use coordinate::CoordinateAddressSource;
pub use http_source::MapsHttpSource;
