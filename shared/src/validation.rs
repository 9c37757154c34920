//! Validation utilities for the SpectraCrop advisory platform

use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;

use crate::models::MeasurementInput;

/// Input validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body must be JSON.")]
    InvalidBody,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("{0} must be a number.")]
    NotANumber(&'static str),

    #[error("crop_type must be text.")]
    CropTypeNotText,

    #[error("Latitude must be between -90 and 90")]
    LatitudeOutOfRange,

    #[error("Longitude must be between -180 and 180")]
    LongitudeOutOfRange,
}

// ============================================================================
// Measurement Validations
// ============================================================================

/// Check that a measurement body is a non-empty JSON object carrying every
/// required field. Reports the first missing field in declaration order.
pub fn validate_required_fields(body: &Value) -> Result<(), ValidationError> {
    let object = match body {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(ValidationError::InvalidBody),
    };

    for field in MeasurementInput::REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

/// Check the JSON types of the measurement fields
pub fn validate_measurement_types(body: &Value) -> Result<(), ValidationError> {
    if !body["crop_type"].is_string() {
        return Err(ValidationError::CropTypeNotText);
    }

    for (field, label) in [
        ("ndvi_value", "NDVI value"),
        ("soil_moisture", "Soil moisture"),
        ("temperature", "Temperature"),
        ("humidity", "Humidity"),
    ] {
        if !body[field].is_number() {
            return Err(ValidationError::NotANumber(label));
        }
    }
    Ok(())
}

// ============================================================================
// Location Validations
// ============================================================================

/// Validate latitude/longitude ranges
pub fn validate_coordinates(latitude: Decimal, longitude: Decimal) -> Result<(), ValidationError> {
    if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
        return Err(ValidationError::LatitudeOutOfRange);
    }
    if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
        return Err(ValidationError::LongitudeOutOfRange);
    }
    Ok(())
}
