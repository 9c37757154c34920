//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{validate_coordinates, ValidationError};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build coordinates, rejecting values outside the WGS84 ranges
    pub fn checked(latitude: Decimal, longitude: Decimal) -> Result<Self, ValidationError> {
        validate_coordinates(latitude, longitude)?;
        Ok(Self::new(latitude, longitude))
    }
}

impl std::fmt::Display for GpsCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
