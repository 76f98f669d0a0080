//! Vehicles service entry-point: loads settings, wires the car API and
//! health probes, and serves OpenAPI docs in debug builds.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use vehicles_api::inbound::http::health::HealthState;
use vehicles_api::settings::VehiclesSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = VehiclesSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    info!(bind_addr = %config.bind_addr(), "starting vehicles service");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}
