//! Pricing service configuration loaded via OrthoConfig.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8082";
const DEFAULT_SEED: u64 = 0x5EED_CA75;

/// Settings layered from CLI flags, `PRICING_*` variables and config files.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRICING")]
pub struct PricingSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Seed mixed with each vehicle id to derive its price.
    pub seed: Option<u64>,
}

impl PricingSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8082`.
    ///
    /// # Errors
    /// Returns [`std::net::AddrParseError`] when the value is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Return the configured seed, falling back to the built-in default.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> PricingSettings {
        PricingSettings::load_from_iter([OsString::from("pricing-service")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PRICING_BIND_ADDR", None::<String>),
            ("PRICING_SEED", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr().map(|addr| addr.port()), Ok(8082));
        assert_eq!(settings.seed(), DEFAULT_SEED);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PRICING_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("PRICING_SEED", Some("7".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            Ok("127.0.0.1:9000".parse().expect("literal address"))
        );
        assert_eq!(settings.seed(), 7);
    }
}
