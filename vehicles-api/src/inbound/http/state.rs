//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CarsCommand, CarsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, update and delete use-cases.
    pub cars_command: Arc<dyn CarsCommand>,
    /// Enriched read use-cases.
    pub cars_query: Arc<dyn CarsQuery>,
}

impl HttpState {
    /// Bundle the driving ports used by the car handlers.
    #[must_use]
    pub const fn new(cars_command: Arc<dyn CarsCommand>, cars_query: Arc<dyn CarsQuery>) -> Self {
        Self {
            cars_command,
            cars_query,
        }
    }
}
