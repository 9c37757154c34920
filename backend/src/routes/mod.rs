//! Route definitions for the SpectraCrop advisory service

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::rate_limit_middleware, AppState};

/// Create API routes
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Field recommendations (unlimited)
        .route("/recommendations", post(handlers::create_recommendations))
        // Upstream proxies, each with its own per-client budget
        .merge(weather_routes(state))
        .merge(soil_routes(state))
}

/// Weather proxy routes (rate limited)
fn weather_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/weather", get(handlers::get_weather))
        .route_layer(middleware::from_fn_with_state(
            state.weather_limiter.clone(),
            rate_limit_middleware,
        ))
}

/// Soil proxy routes (rate limited)
fn soil_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/soil", get(handlers::get_soil))
        .route_layer(middleware::from_fn_with_state(
            state.soil_limiter.clone(),
            rate_limit_middleware,
        ))
}
