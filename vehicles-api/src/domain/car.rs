//! Car aggregate and the value records it owns.
//!
//! A [`Car`] is only ever produced by a store: it carries the identifier and
//! timestamps the store stamped. Callers describe what they want persisted
//! with a [`CarDraft`], which is validated on construction.
//!
//! Read-time enrichment (price, street address) is attached with
//! [`Car::with_price`] and [`Car::with_address`] and is never written back.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned car identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(u64);

impl CarId {
    /// Wrap a raw identifier.
    ///
    /// ```
    /// use vehicles_api::domain::CarId;
    ///
    /// assert!(CarId::new(0).is_err());
    /// assert_eq!(CarId::new(4).map(CarId::get), Ok(4));
    /// ```
    pub fn new(value: u64) -> Result<Self, CarValidationError> {
        if value == 0 {
            return Err(CarValidationError::InvalidId {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CarId {
    type Err = CarValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| CarValidationError::InvalidId {
                value: s.to_owned(),
            })?;
        Self::new(value)
    }
}

/// Vehicle condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    /// Never previously owned.
    New,
    /// Previously owned.
    Used,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::New => "NEW",
            Self::Used => "USED",
        })
    }
}

/// Manufacturer reference value. Code uniqueness is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Manufacturer code, e.g. `101`.
    pub code: u32,
    /// Display name, e.g. `Chevrolet`.
    pub name: String,
}

impl Manufacturer {
    /// Build a manufacturer reference.
    #[must_use]
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

/// Static vehicle attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    /// Body style, e.g. `sedan`.
    pub body: String,
    /// Model name, e.g. `Impala`.
    pub model: String,
    /// Manufacturer reference.
    pub manufacturer: Manufacturer,
    /// Number of doors.
    pub number_of_doors: u8,
    /// Fuel type, e.g. `Gasoline`.
    pub fuel_type: String,
    /// Engine description, e.g. `3.6L V6`.
    pub engine: String,
    /// Odometer reading.
    pub mileage: u32,
    /// Model year.
    pub model_year: u16,
    /// Year of production.
    pub production_year: u16,
    /// Exterior colour.
    pub external_color: String,
}

/// WGS84 position of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Validate and wrap a latitude/longitude pair.
    ///
    /// ```
    /// use vehicles_api::domain::Coordinates;
    ///
    /// assert!(Coordinates::new(40.730610, -73.935242).is_ok());
    /// assert!(Coordinates::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<Self, CarValidationError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CarValidationError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CarValidationError::LatitudeOutOfRange { value: lat });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CarValidationError::LongitudeOutOfRange { value: lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }
}

/// Human-readable address resolved for a pair of coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line.
    pub address: String,
    /// City name.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub zip: String,
}

/// Position plus the derived address, if one was resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    coordinates: Coordinates,
    address: Option<Address>,
}

impl Location {
    /// Location without any resolved address.
    #[must_use]
    pub const fn at(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            address: None,
        }
    }

    /// Stored coordinates.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Resolved address, absent unless a lookup succeeded on this read.
    #[must_use]
    pub const fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }
}

/// Validation failures for car payloads.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarValidationError {
    /// A required text field was blank.
    #[error("{field} must not be blank")]
    BlankField {
        /// Dotted field path, e.g. `details.model`.
        field: &'static str,
    },
    /// Latitude outside `[-90, 90]`.
    #[error("latitude {value} must be within [-90, 90]")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        value: f64,
    },
    /// Longitude outside `[-180, 180]`.
    #[error("longitude {value} must be within [-180, 180]")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        value: f64,
    },
    /// NaN or infinite coordinate.
    #[error("coordinates must be finite")]
    NonFiniteCoordinate,
    /// Identifier was not a positive integer.
    #[error("car id must be a positive integer, got '{value}'")]
    InvalidId {
        /// Rejected raw value.
        value: String,
    },
}

impl CarValidationError {
    /// Dotted path of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::BlankField { field } => field,
            Self::LatitudeOutOfRange { .. } => "location.lat",
            Self::LongitudeOutOfRange { .. } => "location.lon",
            Self::NonFiniteCoordinate => "location",
            Self::InvalidId { .. } => "id",
        }
    }
}

/// Validated content of a create or update request.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDraft {
    condition: Condition,
    details: Details,
    coordinates: Coordinates,
}

impl CarDraft {
    /// Validate the caller-supplied parts of a car.
    pub fn new(
        condition: Condition,
        details: Details,
        coordinates: Coordinates,
    ) -> Result<Self, CarValidationError> {
        for (field, value) in [
            ("details.body", details.body.as_str()),
            ("details.model", details.model.as_str()),
            ("details.manufacturer.name", details.manufacturer.name.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(CarValidationError::BlankField { field });
            }
        }
        Ok(Self {
            condition,
            details,
            coordinates,
        })
    }

    /// Requested condition.
    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.condition
    }

    /// Requested details.
    #[must_use]
    pub const fn details(&self) -> &Details {
        &self.details
    }

    /// Requested coordinates.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

/// Car aggregate root.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: CarId,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    condition: Condition,
    details: Details,
    location: Location,
    price: Option<String>,
}

impl Car {
    /// Materialise a freshly stored car. Both timestamps are `stored_at`.
    #[must_use]
    pub fn stored(id: CarId, draft: CarDraft, stored_at: DateTime<Utc>) -> Self {
        let CarDraft {
            condition,
            details,
            coordinates,
        } = draft;
        Self {
            id,
            created_at: stored_at,
            modified_at: stored_at,
            condition,
            details,
            location: Location::at(coordinates),
            price: None,
        }
    }

    /// Replace the mutable parts, keeping `id` and `created_at`.
    ///
    /// Enrichment is dropped: a revised car reflects storage only.
    #[must_use]
    pub fn revise(self, draft: CarDraft, modified_at: DateTime<Utc>) -> Self {
        Self {
            modified_at,
            ..Self::stored(self.id, draft, self.created_at)
        }
    }

    /// Copy of this car with read-time enrichment removed.
    #[must_use]
    pub fn without_enrichment(&self) -> Self {
        Self {
            location: Location::at(self.location.coordinates),
            price: None,
            ..self.clone()
        }
    }

    /// Attach a price label such as `USD 12345.67`.
    #[must_use]
    pub fn with_price(mut self, price: Option<String>) -> Self {
        self.price = price;
        self
    }

    /// Attach a resolved address.
    #[must_use]
    pub fn with_address(mut self, address: Option<Address>) -> Self {
        self.location.address = address;
        self
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> CarId {
        self.id
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification timestamp.
    #[must_use]
    pub const fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Vehicle condition.
    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.condition
    }

    /// Static attributes.
    #[must_use]
    pub const fn details(&self) -> &Details {
        &self.details
    }

    /// Position and resolved address.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Price label, present only after a successful lookup on this read.
    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }
}
