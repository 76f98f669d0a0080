//! Runtime configuration loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `VEHICLES_*` environment variables and
//! configuration files. Unset lookup endpoints select the fixture adapters.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use crate::domain::LookupRetryPolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 2_000;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a socket address.
    #[error("invalid bind address '{value}': {message}")]
    InvalidBindAddr {
        /// Rejected raw value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
    /// A lookup endpoint is not an absolute URL.
    #[error("invalid {key} '{value}': {message}")]
    InvalidUrl {
        /// Setting name, e.g. `pricing_url`.
        key: &'static str,
        /// Rejected raw value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Settings for the vehicles service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VEHICLES")]
pub struct VehiclesSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the pricing service.
    pub pricing_url: Option<String>,
    /// Base URL of the maps service.
    pub maps_url: Option<String>,
    /// Per-request timeout for remote lookups, in milliseconds.
    pub lookup_timeout_ms: Option<u64>,
    /// Maximum calls per lookup, including the first.
    pub lookup_max_attempts: Option<u32>,
    /// Delay before the first retry, in milliseconds.
    pub lookup_initial_backoff_ms: Option<u64>,
}

impl VehiclesSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Return the pricing service base URL, if configured.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidUrl`] for a non-absolute URL.
    pub fn pricing_url(&self) -> Result<Option<Url>, SettingsError> {
        parse_url("pricing_url", self.pricing_url.as_deref())
    }

    /// Return the maps service base URL, if configured.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidUrl`] for a non-absolute URL.
    pub fn maps_url(&self) -> Result<Option<Url>, SettingsError> {
        parse_url("maps_url", self.maps_url.as_deref())
    }

    /// Return the per-request lookup timeout.
    #[must_use]
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(
            self.lookup_timeout_ms
                .unwrap_or(DEFAULT_LOOKUP_TIMEOUT_MS),
        )
    }

    /// Return the retry policy, overlaying configured values on the default.
    #[must_use]
    pub fn retry_policy(&self) -> LookupRetryPolicy {
        let defaults = LookupRetryPolicy::default();
        LookupRetryPolicy {
            max_attempts: self.lookup_max_attempts.unwrap_or(defaults.max_attempts),
            initial_backoff: self
                .lookup_initial_backoff_ms
                .map_or(defaults.initial_backoff, Duration::from_millis),
            ..defaults
        }
    }
}

fn parse_url(key: &'static str, raw: Option<&str>) -> Result<Option<Url>, SettingsError> {
    let Some(trimmed) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    Url::parse(trimmed)
        .map(Some)
        .map_err(|err| SettingsError::InvalidUrl {
            key,
            value: trimmed.to_owned(),
            message: err.to_string(),
        })
}
