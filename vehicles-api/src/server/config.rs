//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Url;
use vehicles_api::domain::LookupRetryPolicy;
use vehicles_api::settings::{SettingsError, VehiclesSettings};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) pricing_url: Option<Url>,
    pub(crate) maps_url: Option<Url>,
    pub(crate) lookup_timeout: Duration,
    pub(crate) retry: LookupRetryPolicy,
}

impl ServerConfig {
    /// Construct a configuration with fixture lookups and default timings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            pricing_url: None,
            maps_url: None,
            lookup_timeout: Duration::from_secs(2),
            retry: LookupRetryPolicy::default(),
        }
    }

    /// Build a configuration from loaded settings.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the bind address or an endpoint URL is
    /// malformed.
    pub fn from_settings(settings: &VehiclesSettings) -> Result<Self, SettingsError> {
        let mut config = Self::new(settings.bind_addr()?)
            .with_lookup_timeout(settings.lookup_timeout())
            .with_retry_policy(settings.retry_policy());
        if let Some(url) = settings.pricing_url()? {
            config = config.with_pricing_url(url);
        }
        if let Some(url) = settings.maps_url()? {
            config = config.with_maps_url(url);
        }
        Ok(config)
    }

    /// Fetch prices from the pricing service at `url`.
    #[must_use]
    pub fn with_pricing_url(mut self, url: Url) -> Self {
        self.pricing_url = Some(url);
        self
    }

    /// Resolve addresses through the maps service at `url`.
    #[must_use]
    pub fn with_maps_url(mut self, url: Url) -> Self {
        self.maps_url = Some(url);
        self
    }

    /// Override the per-request lookup timeout.
    #[must_use]
    pub const fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Override the lookup retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, retry: LookupRetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_without_endpoints_select_fixtures() {
        let config =
            ServerConfig::from_settings(&VehiclesSettings::default()).expect("default config");

        assert_eq!(config.bind_addr().port(), 8080);
        assert!(config.pricing_url.is_none());
        assert!(config.maps_url.is_none());
        assert_eq!(config.retry, LookupRetryPolicy::default());
    }

    #[test]
    fn settings_endpoints_are_carried_over() {
        let settings = VehiclesSettings {
            pricing_url: Some("http://pricing.local:8082".to_owned()),
            lookup_max_attempts: Some(3),
            ..VehiclesSettings::default()
        };

        let config = ServerConfig::from_settings(&settings).expect("config");

        assert_eq!(
            config.pricing_url.as_ref().map(Url::as_str),
            Some("http://pricing.local:8082/")
        );
        assert_eq!(config.retry.max_attempts, 3);
    }
}
