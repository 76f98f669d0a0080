//! Car store adapters.
//!
//! Only an in-process store is provided; the [`crate::domain::ports::CarRepository`]
//! port is the seam a durable engine would plug into.

mod in_memory_car_repository;

pub use in_memory_car_repository::InMemoryCarRepository;
