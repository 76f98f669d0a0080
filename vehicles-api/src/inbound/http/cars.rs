//! Car HTTP handlers.
//!
//! ```text
//! POST   /cars
//! GET    /cars
//! GET    /cars/{id}
//! PUT    /cars/{id}
//! DELETE /cars/{id}
//! ```
//!
//! Responses are HAL-style: every car carries `_links.self` and
//! `_links.cars`, built from the scheme and host the client used.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Car, CarDraft, CarId, Condition, Coordinates, Details, DomainError, Manufacturer,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ConditionSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{car_validation_error, parse_car_id};

/// Manufacturer payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ManufacturerBody {
    /// Manufacturer code.
    #[schema(example = 101)]
    pub code: u32,
    /// Manufacturer name.
    #[schema(example = "Chevrolet")]
    pub name: String,
}

/// Vehicle details payload, shared by requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailsBody {
    /// Body style.
    #[schema(example = "sedan")]
    pub body: String,
    /// Model name.
    #[schema(example = "Impala")]
    pub model: String,
    /// Manufacturer reference.
    pub manufacturer: ManufacturerBody,
    /// Number of doors.
    #[schema(example = 4)]
    pub number_of_doors: u8,
    /// Fuel type.
    #[schema(example = "Gasoline")]
    pub fuel_type: String,
    /// Engine description.
    #[schema(example = "3.6L V6")]
    pub engine: String,
    /// Odometer reading.
    #[schema(example = 32280)]
    pub mileage: u32,
    /// Model year.
    #[schema(example = 2018)]
    pub model_year: u16,
    /// Year of production.
    #[schema(example = 2018)]
    pub production_year: u16,
    /// Exterior colour.
    #[schema(example = "white")]
    pub external_color: String,
}

/// Location accepted on create and update. Address fields are derived and
/// ignored when submitted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct LocationBody {
    /// Latitude in degrees, within `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, within `[-180, 180]`.
    pub lon: f64,
}

/// Request payload for creating or replacing a car.
///
/// `id`, timestamps, `price` and `_links` are accepted but ignored.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CarRequestBody {
    /// Requested condition.
    #[schema(value_type = ConditionSchema)]
    pub condition: Condition,
    /// Static vehicle attributes.
    pub details: DetailsBody,
    /// Vehicle position.
    pub location: LocationBody,
}

/// Location as returned to clients, with the address resolved on this read.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LocationResponseBody {
    /// Stored latitude.
    pub lat: f64,
    /// Stored longitude.
    pub lon: f64,
    /// Street line, null unless resolved.
    pub address: Option<String>,
    /// City, null unless resolved.
    pub city: Option<String>,
    /// State or region, null unless resolved.
    pub state: Option<String>,
    /// Postal code, null unless resolved.
    pub zip: Option<String>,
}

/// HAL link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Link {
    /// Absolute target URL.
    pub href: String,
}

/// `_links` block attached to each car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CarLinks {
    /// This car.
    #[serde(rename = "self")]
    pub self_link: Link,
    /// The car collection.
    pub cars: Link,
}

/// Car representation returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarResponseBody {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub modified_at: DateTime<Utc>,
    /// Vehicle condition.
    #[schema(value_type = ConditionSchema)]
    pub condition: Condition,
    /// Static vehicle attributes.
    pub details: DetailsBody,
    /// Position plus any address resolved on this read.
    pub location: LocationResponseBody,
    /// Price label, null when the lookup failed or was skipped.
    #[schema(example = "USD 12345.67")]
    pub price: Option<String>,
    /// HAL links.
    #[serde(rename = "_links")]
    pub links: CarLinks,
}

/// Embedded collection of a car listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarListEmbedded {
    /// Every stored car, ordered by id.
    pub car_list: Vec<CarResponseBody>,
}

/// `_links` block attached to a car listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CarListLinks {
    /// The car collection.
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// Car listing returned by `GET /cars`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CarListResponseBody {
    /// Embedded car collection.
    #[serde(rename = "_embedded")]
    pub embedded: CarListEmbedded,
    /// HAL links.
    #[serde(rename = "_links")]
    pub links: CarListLinks,
}

impl From<ManufacturerBody> for Manufacturer {
    fn from(value: ManufacturerBody) -> Self {
        Self::new(value.code, value.name)
    }
}

impl From<DetailsBody> for Details {
    fn from(value: DetailsBody) -> Self {
        Self {
            body: value.body,
            model: value.model,
            manufacturer: value.manufacturer.into(),
            number_of_doors: value.number_of_doors,
            fuel_type: value.fuel_type,
            engine: value.engine,
            mileage: value.mileage,
            model_year: value.model_year,
            production_year: value.production_year,
            external_color: value.external_color,
        }
    }
}

impl From<&Details> for DetailsBody {
    fn from(value: &Details) -> Self {
        Self {
            body: value.body.clone(),
            model: value.model.clone(),
            manufacturer: ManufacturerBody {
                code: value.manufacturer.code,
                name: value.manufacturer.name.clone(),
            },
            number_of_doors: value.number_of_doors,
            fuel_type: value.fuel_type.clone(),
            engine: value.engine.clone(),
            mileage: value.mileage,
            model_year: value.model_year,
            production_year: value.production_year,
            external_color: value.external_color.clone(),
        }
    }
}

impl CarRequestBody {
    fn into_draft(self) -> Result<CarDraft, DomainError> {
        let coordinates = Coordinates::new(self.location.lat, self.location.lon)
            .map_err(|error| car_validation_error(&error))?;
        CarDraft::new(self.condition, self.details.into(), coordinates)
            .map_err(|error| car_validation_error(&error))
    }
}

impl CarLinks {
    fn for_car(base: &str, id: CarId) -> Self {
        Self {
            self_link: Link {
                href: format!("{base}/cars/{id}"),
            },
            cars: Link {
                href: format!("{base}/cars"),
            },
        }
    }
}

impl CarResponseBody {
    /// Render `car` with links rooted at `base` (scheme and authority).
    #[must_use]
    pub fn from_car(car: &Car, base: &str) -> Self {
        let location = car.location();
        let coordinates = location.coordinates();
        let address = location.address();
        Self {
            id: car.id().get(),
            created_at: car.created_at(),
            modified_at: car.modified_at(),
            condition: car.condition(),
            details: car.details().into(),
            location: LocationResponseBody {
                lat: coordinates.lat(),
                lon: coordinates.lon(),
                address: address.map(|a| a.address.clone()),
                city: address.map(|a| a.city.clone()),
                state: address.map(|a| a.state.clone()),
                zip: address.map(|a| a.zip.clone()),
            },
            price: car.price().map(str::to_owned),
            links: CarLinks::for_car(base, car.id()),
        }
    }
}

fn base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

/// Create a car. The response carries no price.
#[utoipa::path(
    post,
    path = "/cars",
    request_body = CarRequestBody,
    responses(
        (status = 201, description = "Car created", body = CarResponseBody,
            headers(("Location" = String, description = "URL of the new car"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "createCar"
)]
#[post("/cars")]
pub async fn create_car(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<CarRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let car = state.cars_command.create(draft).await?;
    let body = CarResponseBody::from_car(&car, &base_url(&req));
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, body.links.self_link.href.clone()))
        .json(body))
}

/// List every car, each priced when the pricing lookup succeeds.
#[utoipa::path(
    get,
    path = "/cars",
    responses(
        (status = 200, description = "All cars", body = CarListResponseBody),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "listCars"
)]
#[get("/cars")]
pub async fn list_cars(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<CarListResponseBody>> {
    let cars = state.cars_query.list().await?;
    let base = base_url(&req);
    Ok(web::Json(CarListResponseBody {
        embedded: CarListEmbedded {
            car_list: cars
                .iter()
                .map(|car| CarResponseBody::from_car(car, &base))
                .collect(),
        },
        links: CarListLinks {
            self_link: Link {
                href: format!("{base}/cars"),
            },
        },
    }))
}

/// Fetch one car with best-effort price and address.
#[utoipa::path(
    get,
    path = "/cars/{id}",
    params(("id" = u64, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car found", body = CarResponseBody),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "Car not found", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "getCar"
)]
#[get("/cars/{id}")]
pub async fn get_car(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> ApiResult<web::Json<CarResponseBody>> {
    let id = parse_car_id(&path)?;
    let car = state.cars_query.find_by_id(id).await?;
    Ok(web::Json(CarResponseBody::from_car(&car, &base_url(&req))))
}

/// Replace a car's condition, details and location. The path id wins over
/// any id in the body.
#[utoipa::path(
    put,
    path = "/cars/{id}",
    params(("id" = u64, Path, description = "Car identifier")),
    request_body = CarRequestBody,
    responses(
        (status = 200, description = "Car updated", body = CarResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Car not found", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "updateCar"
)]
#[put("/cars/{id}")]
pub async fn update_car(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<CarRequestBody>,
) -> ApiResult<web::Json<CarResponseBody>> {
    let id = parse_car_id(&path)?;
    let draft = payload.into_inner().into_draft()?;
    let car = state.cars_command.update(id, draft).await?;
    Ok(web::Json(CarResponseBody::from_car(&car, &base_url(&req))))
}

/// Delete a car permanently.
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    params(("id" = u64, Path, description = "Car identifier")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "Car not found", body = ErrorSchema)
    ),
    tags = ["cars"],
    operation_id = "deleteCar"
)]
#[delete("/cars/{id}")]
pub async fn delete_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_car_id(&path)?;
    state.cars_command.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "cars_tests.rs"]
mod tests;
