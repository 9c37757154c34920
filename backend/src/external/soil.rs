//! Soil properties API client (SoilGrids)

use reqwest::{Client, StatusCode};
use serde_json::Value;
use shared::GpsCoordinates;

use crate::error::{AppError, AppResult};

/// Soil properties API client
#[derive(Clone)]
pub struct SoilClient {
    client: Client,
    base_url: String,
}

impl SoilClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch soil properties at a point
    pub async fn get_soil_properties(&self, location: GpsCoordinates) -> AppResult<Value> {
        let url = format!("{}/properties", self.base_url);
        let lon = location.longitude.to_string();
        let lat = location.latitude.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("lon", lon.as_str()), ("lat", lat.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Soil API request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::Upstream(format!(
                "Error fetching soil data: {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse soil response: {}", e)))
    }
}
