//! Port for car persistence.
//!
//! The store owns identity and timestamps: [`CarRepository::insert`] assigns
//! the next identifier and stamps both timestamps from its clock, and
//! [`CarRepository::update`] refreshes `modified_at` while keeping
//! `created_at`. Stored cars never carry a price or a resolved address.

use async_trait::async_trait;

use crate::domain::{Car, CarDraft, CarId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by car store adapters.
    pub enum CarRepositoryError {
        /// Store could not be reached.
        Connection => "car repository connection failed",
        /// Query or mutation failed during execution.
        Query => "car repository query failed",
    }
}

/// Port for storing and retrieving cars.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Persist a new car, assigning a fresh identifier.
    async fn insert(&self, draft: CarDraft) -> Result<Car, CarRepositoryError>;

    /// Fetch one car. Returns `None` when the identifier is unknown.
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarRepositoryError>;

    /// Fetch every stored car in ascending identifier order.
    async fn list(&self) -> Result<Vec<Car>, CarRepositoryError>;

    /// Replace the mutable parts of a stored car.
    ///
    /// Returns `None` when the identifier is unknown; nothing is written.
    async fn update(&self, id: CarId, draft: CarDraft) -> Result<Option<Car>, CarRepositoryError>;

    /// Remove a car permanently. Returns whether a record was removed.
    async fn delete(&self, id: CarId) -> Result<bool, CarRepositoryError>;
}
