//! Soil service: validates coordinates and proxies the soil properties API

use rust_decimal::Decimal;
use serde_json::Value;
use shared::GpsCoordinates;

use crate::error::AppResult;
use crate::external::SoilClient;

#[derive(Clone)]
pub struct SoilService {
    client: SoilClient,
}

impl SoilService {
    pub fn new(client: SoilClient) -> Self {
        Self { client }
    }

    /// Soil properties at a point
    pub async fn properties(&self, latitude: Decimal, longitude: Decimal) -> AppResult<Value> {
        let location = GpsCoordinates::checked(latitude, longitude)?;
        self.client.get_soil_properties(location).await
    }
}
