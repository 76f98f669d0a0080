//! Car aggregation service.
//!
//! Implements the car driving ports over the store and the two lookup
//! ports. Writes only touch the store. Reads enrich each car with a price and,
//! for single-car reads, an address; lookup failures are logged and leave the
//! corresponding fields empty.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::{join, join_all};
use tracing::{info, warn};

use crate::domain::ports::{
    AddressSource, CarRepository, CarRepositoryError, CarsCommand, CarsQuery, PriceSource,
};
use crate::domain::{
    Address, Car, CarDraft, CarId, Coordinates, DomainError, LookupRetryPolicy, LookupSleeper,
    TokioSleeper,
};

fn map_repository_error(error: CarRepositoryError) -> DomainError {
    match error {
        CarRepositoryError::Connection { message } => {
            DomainError::service_unavailable(format!("car repository unavailable: {message}"))
        }
        CarRepositoryError::Query { message } => {
            DomainError::internal(format!("car repository error: {message}"))
        }
    }
}

fn car_not_found(id: CarId) -> DomainError {
    DomainError::not_found(format!("car {id} not found"))
}

/// Car service implementing [`CarsCommand`] and [`CarsQuery`].
pub struct CarService<R: ?Sized, P: ?Sized, A: ?Sized> {
    cars: Arc<R>,
    prices: Arc<P>,
    addresses: Arc<A>,
    retry: LookupRetryPolicy,
    sleeper: Arc<dyn LookupSleeper>,
}

impl<R: ?Sized, P: ?Sized, A: ?Sized> CarService<R, P, A> {
    /// Create a service using the default retry policy and tokio sleeps.
    #[must_use]
    pub fn new(cars: Arc<R>, prices: Arc<P>, addresses: Arc<A>) -> Self {
        Self {
            cars,
            prices,
            addresses,
            retry: LookupRetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replace the lookup retry policy and sleeper.
    #[must_use]
    pub fn with_retry(mut self, retry: LookupRetryPolicy, sleeper: Arc<dyn LookupSleeper>) -> Self {
        self.retry = retry;
        self.sleeper = sleeper;
        self
    }
}

impl<R, P, A> CarService<R, P, A>
where
    R: ?Sized,
    P: PriceSource + ?Sized,
    A: AddressSource + ?Sized,
{
    async fn lookup_price(&self, id: CarId) -> Option<String> {
        let prices = self.prices.as_ref();
        match self
            .retry
            .run(self.sleeper.as_ref(), move || prices.get_price(id))
            .await
        {
            Ok(price) => Some(price.to_string()),
            Err(error) => {
                warn!(car_id = %id, error_kind = error.kind(), error = %error, "price lookup failed");
                None
            }
        }
    }

    async fn lookup_address(&self, id: CarId, coordinates: Coordinates) -> Option<Address> {
        let addresses = self.addresses.as_ref();
        let position = &coordinates;
        match self
            .retry
            .run(self.sleeper.as_ref(), move || addresses.get_address(position))
            .await
        {
            Ok(address) => Some(address),
            Err(error) => {
                warn!(car_id = %id, error_kind = error.kind(), error = %error, "address lookup failed");
                None
            }
        }
    }
}

#[async_trait]
impl<R, P, A> CarsCommand for CarService<R, P, A>
where
    R: CarRepository + ?Sized,
    P: PriceSource + ?Sized,
    A: AddressSource + ?Sized,
{
    async fn create(&self, draft: CarDraft) -> Result<Car, DomainError> {
        let car = self.cars.insert(draft).await.map_err(map_repository_error)?;
        info!(car_id = %car.id(), "car created");
        Ok(car.without_enrichment())
    }

    async fn update(&self, id: CarId, draft: CarDraft) -> Result<Car, DomainError> {
        let car = self
            .cars
            .update(id, draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| car_not_found(id))?;
        info!(car_id = %id, "car updated");
        Ok(car.without_enrichment())
    }

    async fn delete(&self, id: CarId) -> Result<(), DomainError> {
        let removed = self.cars.delete(id).await.map_err(map_repository_error)?;
        if !removed {
            return Err(car_not_found(id));
        }
        info!(car_id = %id, "car deleted");
        Ok(())
    }
}

#[async_trait]
impl<R, P, A> CarsQuery for CarService<R, P, A>
where
    R: CarRepository + ?Sized,
    P: PriceSource + ?Sized,
    A: AddressSource + ?Sized,
{
    async fn list(&self) -> Result<Vec<Car>, DomainError> {
        let cars = self.cars.list().await.map_err(map_repository_error)?;
        let prices = join_all(cars.iter().map(|car| self.lookup_price(car.id()))).await;
        Ok(cars
            .into_iter()
            .zip(prices)
            .map(|(car, price)| car.with_price(price))
            .collect())
    }

    async fn find_by_id(&self, id: CarId) -> Result<Car, DomainError> {
        let car = self
            .cars
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| car_not_found(id))?;
        let (price, address) = join(
            self.lookup_price(id),
            self.lookup_address(id, car.location().coordinates()),
        )
        .await;
        Ok(car.with_price(price).with_address(address))
    }
}

#[cfg(test)]
#[path = "car_service_tests.rs"]
mod tests;
