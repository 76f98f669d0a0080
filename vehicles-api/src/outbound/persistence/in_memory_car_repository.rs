//! In-process car store.
//!
//! Writes are serialised behind a `tokio::sync::RwLock`. Identifiers are
//! allocated under the write lock, so concurrent inserts never collide and
//! ids increase strictly in allocation order. Deleted ids are not reused.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;

use crate::domain::ports::{CarRepository, CarRepositoryError};
use crate::domain::{Car, CarDraft, CarId};

#[derive(Debug)]
struct StoreState {
    next_id: u64,
    cars: BTreeMap<CarId, Car>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            next_id: 1,
            cars: BTreeMap::new(),
        }
    }
}

/// In-memory [`CarRepository`] stamping timestamps from an injected clock.
pub struct InMemoryCarRepository {
    state: RwLock<StoreState>,
    clock: Arc<dyn Clock>,
}

impl InMemoryCarRepository {
    /// Create an empty store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use vehicles_api::outbound::persistence::InMemoryCarRepository;
    ///
    /// let _store = InMemoryCarRepository::new(Arc::new(DefaultClock));
    /// ```
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            clock,
        }
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn insert(&self, draft: CarDraft) -> Result<Car, CarRepositoryError> {
        let mut state = self.state.write().await;
        let id = CarId::new(state.next_id)
            .map_err(|error| CarRepositoryError::query(error.to_string()))?;
        state.next_id = state
            .next_id
            .checked_add(1)
            .ok_or_else(|| CarRepositoryError::query("car id space exhausted"))?;
        let car = Car::stored(id, draft, self.clock.utc());
        state.cars.insert(id, car.clone());
        Ok(car)
    }

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarRepositoryError> {
        Ok(self.state.read().await.cars.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Car>, CarRepositoryError> {
        Ok(self.state.read().await.cars.values().cloned().collect())
    }

    async fn update(&self, id: CarId, draft: CarDraft) -> Result<Option<Car>, CarRepositoryError> {
        let mut state = self.state.write().await;
        let Some(existing) = state.cars.remove(&id) else {
            return Ok(None);
        };
        let revised = existing.revise(draft, self.clock.utc());
        state.cars.insert(id, revised.clone());
        Ok(Some(revised))
    }

    async fn delete(&self, id: CarId) -> Result<bool, CarRepositoryError> {
        Ok(self.state.write().await.cars.remove(&id).is_some())
    }
}
