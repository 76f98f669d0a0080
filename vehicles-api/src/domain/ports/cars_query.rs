//! Driving port for car reads.

use async_trait::async_trait;

use crate::domain::{Car, CarId, DomainError};

/// Domain use-case port for reading enriched cars.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarsQuery: Send + Sync {
    /// Every stored car in ascending id order, each with a price when the
    /// lookup succeeded.
    async fn list(&self) -> Result<Vec<Car>, DomainError>;

    /// One car with price and address when those lookups succeeded.
    async fn find_by_id(&self, id: CarId) -> Result<Car, DomainError>;
}
