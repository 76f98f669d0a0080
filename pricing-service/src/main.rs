//! Pricing service entry-point.

use actix_web::{App, HttpServer, web};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pricing_service::PriceGenerator;
use pricing_service::inbound::http::health::{HealthState, live, ready};
use pricing_service::inbound::http::prices::get_price;
use pricing_service::settings::PricingSettings;

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

    let settings = PricingSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let generator = web::Data::new(PriceGenerator::new(settings.seed()));
    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(generator.clone())
            .app_data(server_health_state.clone())
            .service(get_price)
            .service(ready)
            .service(live)
    })
    .bind(bind_addr)?
    .run();

    info!(bind_addr = %bind_addr, "pricing service listening");
    health_state.mark_ready();
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}
