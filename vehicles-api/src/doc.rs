//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the car CRUD endpoints and the health probes
//! - **Schemas**: request/response bodies plus wrappers ([`ErrorSchema`],
//!   [`ErrorCodeSchema`], [`ConditionSchema`]) that document domain types
//!   without coupling them to utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::cars::{
    CarLinks, CarListEmbedded, CarListLinks, CarListResponseBody, CarRequestBody,
    CarResponseBody, DetailsBody, Link, LocationBody, LocationResponseBody, ManufacturerBody,
};
use crate::inbound::http::schemas::{ConditionSchema, ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vehicles API",
        description = "CRUD interface for car records, enriched on read with price and address.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cars::create_car,
        crate::inbound::http::cars::list_cars,
        crate::inbound::http::cars::get_car,
        crate::inbound::http::cars::update_car,
        crate::inbound::http::cars::delete_car,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CarRequestBody,
        CarResponseBody,
        CarListResponseBody,
        CarListEmbedded,
        CarListLinks,
        CarLinks,
        Link,
        DetailsBody,
        ManufacturerBody,
        LocationBody,
        LocationResponseBody,
        ConditionSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "cars", description = "Car records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
