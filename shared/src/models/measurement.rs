//! Field measurement models

use serde::{Deserialize, Serialize};

/// Field measurements submitted by a grower or sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub crop_type: String,
    /// Normalized Difference Vegetation Index, conventionally -1 to 1
    pub ndvi_value: f64,
    /// Volumetric water content in percent
    pub soil_moisture: f64,
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

impl MeasurementInput {
    /// Fields a measurement body must carry, in the order they are checked
    pub const REQUIRED_FIELDS: [&'static str; 5] = [
        "crop_type",
        "ndvi_value",
        "soil_moisture",
        "temperature",
        "humidity",
    ];

    /// Convert a JSON body into typed measurements.
    ///
    /// Fails when a field has the wrong JSON type, e.g. a text `ndvi_value`.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn ndvi_health(&self) -> NdviHealth {
        NdviHealth::from_ndvi(self.ndvi_value)
    }
}

/// Coarse vegetation health band derived from NDVI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NdviHealth {
    /// Below 0.2
    Poor,
    /// 0.2 up to 0.5
    Moderate,
    /// 0.5 up to 0.8
    Good,
    /// 0.8 and above
    Excellent,
}

impl NdviHealth {
    pub fn from_ndvi(ndvi: f64) -> Self {
        match ndvi {
            n if n < 0.2 => NdviHealth::Poor,
            n if n < 0.5 => NdviHealth::Moderate,
            n if n < 0.8 => NdviHealth::Good,
            _ => NdviHealth::Excellent,
        }
    }
}

impl std::fmt::Display for NdviHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NdviHealth::Poor => write!(f, "Poor"),
            NdviHealth::Moderate => write!(f, "Moderate"),
            NdviHealth::Good => write!(f, "Good"),
            NdviHealth::Excellent => write!(f, "Excellent"),
        }
    }
}
