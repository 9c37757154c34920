//! WebAssembly module for the SpectraCrop dashboard
//!
//! Provides client-side computation for:
//! - Field recommendations (same rules as the API)
//! - NDVI health labels
//! - Offline validation of the measurement form

use serde_json::Value;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Generate recommendations from a measurement JSON object
#[wasm_bindgen]
pub fn generate_recommendations(measurements_json: &str) -> Result<String, JsValue> {
    recommendations_json(measurements_json).map_err(to_js_error)
}

/// Recommendations rendered as `Label: text` lines
#[wasm_bindgen]
pub fn format_recommendations_text(measurements_json: &str) -> Result<String, JsValue> {
    recommendations_text(measurements_json).map_err(to_js_error)
}

/// Check a measurement form before it is posted
#[wasm_bindgen]
pub fn validate_measurement_json(measurements_json: &str) -> Result<(), JsValue> {
    parse_measurements(measurements_json)
        .map(|_| ())
        .map_err(to_js_error)
}

/// Label an NDVI reading (Poor, Moderate, Good, Excellent)
#[wasm_bindgen]
pub fn ndvi_health_label(ndvi: f64) -> String {
    NdviHealth::from_ndvi(ndvi).to_string()
}

fn to_js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}

fn parse_measurements(measurements_json: &str) -> Result<MeasurementInput, String> {
    let body: Value = serde_json::from_str(measurements_json)
        .map_err(|_| ValidationError::InvalidBody.to_string())?;

    validate_required_fields(&body).map_err(|e| e.to_string())?;
    validate_measurement_types(&body).map_err(|e| e.to_string())?;

    MeasurementInput::from_json(body).map_err(|e| format!("Invalid measurement values: {}", e))
}

fn recommendations_json(measurements_json: &str) -> Result<String, String> {
    let input = parse_measurements(measurements_json)?;
    let recommendations = shared::generate_recommendations(&input);
    serde_json::to_string(&recommendations).map_err(|e| e.to_string())
}

fn recommendations_text(measurements_json: &str) -> Result<String, String> {
    let input = parse_measurements(measurements_json)?;
    Ok(format_recommendations(&shared::generate_recommendations(
        &input,
    )))
}
