//! HTTP handler for field recommendations

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use shared::RecommendationSet;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Evaluate posted field measurements
pub async fn create_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<RecommendationSet>> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!("Request body is empty or not in JSON format: {}", rejection);
        AppError::InvalidBody
    })?;

    let recommendations = state.recommendations.recommend(body).map_err(|e| {
        if let AppError::Recommendation(msg) = &e {
            tracing::error!("Error generating recommendations: {}", msg);
        }
        e
    })?;

    tracing::info!("Recommendations generated successfully.");
    Ok(Json(recommendations))
}
