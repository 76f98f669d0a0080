//! Domain primitives, aggregates and use-case services.
//!
//! Public surface:
//! - [`Car`] and its value records (`car` module).
//! - [`DomainError`] / [`ErrorCode`]: transport-agnostic use-case failures.
//! - [`CarService`]: implements the `CarsCommand` and `CarsQuery` driving
//!   ports on top of the store and lookup driven ports.
//! - [`LookupRetryPolicy`]: bounded retry for remote lookups.

pub mod car;
mod car_service;
pub mod error;
pub mod lookup_retry;
pub mod ports;
mod trace_id;

pub use self::car::{
    Address, Car, CarDraft, CarId, CarValidationError, Condition, Coordinates, Details, Location,
    Manufacturer,
};
pub use self::car_service::CarService;
pub use self::error::{DomainError, ErrorCode};
pub use self::lookup_retry::{LookupRetryPolicy, LookupSleeper, RetryableLookupError, TokioSleeper};
pub use self::trace_id::TraceId;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
