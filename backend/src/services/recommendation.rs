//! Recommendation service: validates measurement bodies and runs the rule engine

use serde_json::Value;
use shared::{generate_recommendations, validate_required_fields, MeasurementInput, RecommendationSet};

use crate::error::{AppError, AppResult};

#[derive(Clone, Default)]
pub struct RecommendationService;

impl RecommendationService {
    pub fn new() -> Self {
        Self
    }

    /// Produce advice for a raw JSON measurement body.
    ///
    /// Missing fields are client errors. Fields of the wrong JSON type fail
    /// during conversion and surface as processing errors.
    pub fn recommend(&self, body: Value) -> AppResult<RecommendationSet> {
        validate_required_fields(&body)?;

        let input = MeasurementInput::from_json(body).map_err(|e| {
            AppError::Recommendation(format!("Invalid measurement values: {}", e))
        })?;

        tracing::debug!(
            "Evaluating {} at NDVI {} ({})",
            input.crop_type,
            input.ndvi_value,
            input.ndvi_health()
        );

        Ok(generate_recommendations(&input))
    }
}
