//! HTTP adapter for the pricing service.

pub mod error;
pub mod health;
pub mod prices;

pub use error::ApiError;
