//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`CarsCommand`, `CarsQuery`) are what inbound adapters call.
//! Driven ports (`CarRepository`, `PriceSource`, `AddressSource`) are what the
//! domain calls; each exposes a typed error enum built with
//! `define_port_error!`.

mod macros;
pub(crate) use macros::define_port_error;

mod address_source;
mod car_repository;
mod cars_command;
mod cars_query;
mod price_source;

#[cfg(test)]
pub use address_source::MockAddressSource;
pub use address_source::{AddressSource, AddressSourceError, FixtureAddressSource};
#[cfg(test)]
pub use car_repository::MockCarRepository;
pub use car_repository::{CarRepository, CarRepositoryError};
#[cfg(test)]
pub use cars_command::MockCarsCommand;
pub use cars_command::CarsCommand;
#[cfg(test)]
pub use cars_query::MockCarsQuery;
pub use cars_query::CarsQuery;
#[cfg(test)]
pub use price_source::MockPriceSource;
pub use price_source::{FixturePriceSource, Price, PriceSource, PriceSourceError};
