//! SpectraCrop advisory service
//!
//! Proxies weather and soil data for the field dashboard and turns field
//! measurements into crop, irrigation and pesticide advice.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::{SoilClient, WeatherClient};
use middleware::RateLimiter;
use services::{RecommendationService, SoilService, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
    pub soil: SoilService,
    pub recommendations: RecommendationService,
    pub weather_limiter: Arc<RateLimiter>,
    pub soil_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Build clients, services and limiters from configuration
    pub fn new(config: Config) -> Self {
        let weather_client = WeatherClient::with_base_url(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        );
        let soil_client = SoilClient::new(config.soil.api_endpoint.clone());
        let per_minute = config.rate_limit.requests_per_minute;

        Self {
            weather: WeatherService::new(weather_client, config.weather.default_location.clone()),
            soil: SoilService::new(soil_client),
            recommendations: RecommendationService::new(),
            weather_limiter: Arc::new(RateLimiter::per_minute(per_minute)),
            soil_limiter: Arc::new(RateLimiter::per_minute(per_minute)),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.allowed_origins);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes(&state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS restricted to the configured dashboard origins
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
