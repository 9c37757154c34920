//! HTTP handlers for weather and soil proxy endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use shared::GpsCoordinates;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for current weather
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
}

/// Fetch current weather from the provider
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<Value>> {
    let location = state.weather.resolve_location(query.location.as_deref());
    tracing::info!("Received request for weather data for location: {}", location);

    match state.weather.current(location).await {
        Ok(data) => {
            tracing::info!("Weather data retrieved successfully.");
            Ok(Json(data))
        }
        Err(e) => {
            tracing::error!("Error fetching weather data for {}: {}", location, e);
            Err(e)
        }
    }
}

/// Query parameters for soil properties
#[derive(Debug, Deserialize)]
pub struct SoilQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Fetch soil properties for a point
pub async fn get_soil(
    State(state): State<AppState>,
    query: Result<Query<SoilQuery>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let Query(query) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let point = GpsCoordinates::new(query.latitude, query.longitude);
    tracing::info!("Received request for soil data at {}", point);

    let data = state.soil.properties(query.latitude, query.longitude).await?;
    tracing::info!("Soil data retrieved successfully.");
    Ok(Json(data))
}
