//! Driving port for car mutations.
//!
//! Results are never enriched: a created or updated car comes back with no
//! price and no resolved address.

use async_trait::async_trait;

use crate::domain::{Car, CarDraft, CarId, DomainError};

/// Domain use-case port for creating, updating and deleting cars.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarsCommand: Send + Sync {
    /// Persist a new car and return it with its assigned identifier.
    async fn create(&self, draft: CarDraft) -> Result<Car, DomainError>;

    /// Replace the mutable parts of car `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when `id` is unknown.
    async fn update(&self, id: CarId, draft: CarDraft) -> Result<Car, DomainError>;

    /// Remove car `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when `id` is unknown.
    async fn delete(&self, id: CarId) -> Result<(), DomainError>;
}
