//! Driven port for reverse address lookups.
//!
//! Lookups are best-effort: callers treat every error as "no address".

use async_trait::async_trait;

use crate::domain::lookup_retry::RetryableLookupError;
use crate::domain::{Address, Coordinates};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while resolving an address.
    pub enum AddressSourceError {
        /// Network transport failed before receiving a response.
        Transport => "maps transport failed",
        /// Lookup exceeded its timeout.
        Timeout => "maps timeout",
        /// Maps service answered with a failure status.
        Unavailable => "maps service unavailable",
        /// Maps response could not be decoded.
        Decode => "maps response decode failed",
    }
}

impl RetryableLookupError for AddressSourceError {
    fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::Unavailable { .. }
        )
    }
}

/// Port for resolving coordinates into a street address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Resolve the address nearest to `coordinates`.
    async fn get_address(&self, coordinates: &Coordinates) -> Result<Address, AddressSourceError>;
}

/// Fixture that never resolves an address.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAddressSource;

#[async_trait]
impl AddressSource for FixtureAddressSource {
    async fn get_address(&self, _coordinates: &Coordinates) -> Result<Address, AddressSourceError> {
        Err(AddressSourceError::unavailable("no maps endpoint configured"))
    }
}
