//! Value objects for the Event Management context.

use std::fmt;

use eventhub_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Where an event takes place.
///
/// Immutable after construction; any change requires constructing a new
/// `Location`. Equality is by value. The coordinate pair is optional but
/// indivisible: either both latitude and longitude are present or neither is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    address: String,
    city: String,
    country: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl Location {
    /// Creates a validated location. Text fields are stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when address, city, or country is
    /// empty or whitespace-only, when a coordinate is out of range, or when
    /// only one half of the coordinate pair is provided.
    pub fn new(
        address: &str,
        city: &str,
        country: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, DomainError> {
        if address.trim().is_empty() {
            return Err(DomainError::Validation(
                "location address cannot be empty".into(),
            ));
        }
        if city.trim().is_empty() {
            return Err(DomainError::Validation(
                "location city cannot be empty".into(),
            ));
        }
        if country.trim().is_empty() {
            return Err(DomainError::Validation(
                "location country cannot be empty".into(),
            ));
        }
        if let Some(lat) = latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(DomainError::Validation(
                    "latitude must be between -90 and 90 degrees".into(),
                ));
            }
        }
        if let Some(lon) = longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(DomainError::Validation(
                    "longitude must be between -180 and 180 degrees".into(),
                ));
            }
        }
        if latitude.is_some() != longitude.is_some() {
            return Err(DomainError::Validation(
                "latitude and longitude must be provided together".into(),
            ));
        }

        Ok(Self {
            address: address.trim().to_owned(),
            city: city.trim().to_owned(),
            country: country.trim().to_owned(),
            latitude,
            longitude,
        })
    }

    /// Street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// City name.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Country name.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Latitude in degrees, if a coordinate pair was provided.
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// Longitude in degrees, if a coordinate pair was provided.
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Returns true iff both latitude and longitude are present.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Human-readable "address, city, country" — display only, not for parsing.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.address, self.city, self.country)
    }
}
